use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use insanity::api::{
    draw_scrambled, solve, Preset, Puzzle, ReplayToken, Solution, SolveError, Tower,
};

mod provenance;
mod view;

use provenance::{write_sidecar, SolveRecord};
use view::SolveView;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Instant Insanity solver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a puzzle (defaults to the standard preset)
    Solve {
        /// Built-in puzzle name (see `presets`)
        #[arg(long, conflicts_with_all = ["cubes", "input"])]
        preset: Option<String>,
        /// Inline rows, e.g. "BRYGBR,RRYBGY,GBBRYG,BGYRGY"
        #[arg(long, conflicts_with = "input")]
        cubes: Option<String>,
        /// Text file with one row per cube
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
        /// Also write the JSON result and a provenance sidecar here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a random solvable puzzle in editor form
    Scramble {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// List the built-in puzzles
    Presets,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            preset,
            cubes,
            input,
            json,
            out,
        } => {
            let (puzzle, source) = load_puzzle(preset, cubes, input)?;
            run_solve(&puzzle, &source, json, out.as_deref())
        }
        Action::Scramble { seed, index } => scramble(seed, index),
        Action::Presets => presets(),
        Action::Report => report(),
    }
}

fn load_puzzle(
    preset: Option<String>,
    cubes: Option<String>,
    input: Option<PathBuf>,
) -> Result<(Puzzle, String)> {
    match (preset, cubes, input) {
        (Some(name), None, None) => {
            let Some(p) = Preset::from_name(&name) else {
                bail!("unknown preset {name:?}; try `cli presets`");
            };
            Ok((p.puzzle(), format!("preset:{}", p.name())))
        }
        (None, Some(rows), None) => Ok((Puzzle::parse(&rows)?, "inline".to_string())),
        (None, None, Some(path)) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let puzzle =
                Puzzle::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
            Ok((puzzle, format!("file:{}", path.display())))
        }
        (None, None, None) => Ok((Preset::Standard.puzzle(), "preset:standard".to_string())),
        _ => bail!("give at most one of --preset, --cubes, --input"),
    }
}

fn run_solve(puzzle: &Puzzle, source: &str, json: bool, out: Option<&Path>) -> Result<()> {
    if puzzle.has_unset() {
        tracing::warn!(source, "puzzle has blank (X) faces");
    }
    let result = solve(puzzle);
    let status = match &result {
        Ok(_) => "solved",
        Err(e) => e.kind(),
    };
    tracing::info!(source, status, "solve");
    let view = SolveView::new(puzzle, &result);

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(&view)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let prov = write_sidecar(out, &SolveRecord::new(source, &view, out))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_text(puzzle, &view, &result);
    }

    match result {
        Ok(_) => Ok(()),
        Err(e) => bail!("{} ({})", e, e.kind()),
    }
}

fn print_text(puzzle: &Puzzle, view: &SolveView, result: &Result<Solution, SolveError>) {
    println!("puzzle:");
    for row in &view.puzzle {
        println!("  {row}");
    }
    if !view.edges.is_empty() {
        println!("edges:");
        for e in &view.edges {
            println!("  #{:<2} cube {} {:<10} {}-{}", e.id, e.cube, e.pair, e.u, e.v);
        }
        println!("g1 (front/back): {:?}", view.g1);
        println!("g2 (left/right): {:?}", view.g2);
    }
    let Ok(sol) = result else {
        return;
    };
    let mut tower = Tower::new(*puzzle);
    tower.apply(&sol.orientation);
    println!("tower (front left back right):");
    let shown = tower.sides();
    for (i, c) in view.cubes.iter().enumerate() {
        let sides: Vec<String> = shown.iter().map(|side| side[i].to_string()).collect();
        println!(
            "  cube {}: rotation {:>2}  {}",
            c.cube,
            c.rotation.map_or_else(|| "?".to_string(), |r| r.to_string()),
            sides.join(" ")
        );
    }
    println!("solved: {}", tower.is_solved());
}

fn scramble(seed: u64, index: u64) -> Result<()> {
    tracing::info!(seed, index, "scramble");
    println!("{}", draw_scrambled(ReplayToken { seed, index }));
    Ok(())
}

fn presets() -> Result<()> {
    for p in Preset::ALL {
        let rows: Vec<String> = p.puzzle().cubes.iter().map(|c| c.to_string()).collect();
        println!("{:<9} {}", p.name(), rows.join(","));
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": insanity::VERSION,
        "presets": Preset::ALL.map(|p| p.name()),
        "rotations": insanity::api::catalog().len()
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
