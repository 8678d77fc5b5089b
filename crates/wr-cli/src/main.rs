//! warren: generate a maze-like dungeon layout and print it.
//!
//! Thin adapter over wr-core: parses parameters, runs the generator, and
//! renders the finished grid as ASCII (or JSON for downstream tooling).

use clap::Parser;

use wr_core::dungeon::{CellState, Dungeon, GeneratorConfig, Pos, generate};

/// Generate a maze-like dungeon layout
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about = "Generate a maze-like dungeon layout", long_about = None)]
struct Args {
    /// Grid width (rounded up to odd)
    #[arg(short = 'W', long, default_value_t = 51)]
    width: usize,

    /// Grid height (rounded up to odd)
    #[arg(short = 'H', long, default_value_t = 31)]
    height: usize,

    /// RNG seed; omitted means a fresh dungeon each run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Carve 2-wide corridors with doors as narrow chokepoints
    #[arg(long)]
    wide: bool,

    /// Room placement attempts
    #[arg(long)]
    trials: Option<u32>,

    /// Probability of a corridor turning per carve step
    #[arg(long)]
    wind: Option<f64>,

    /// Chance of opening a redundant loop connector
    #[arg(long)]
    extra_connectors: Option<f64>,

    /// Emit the finished grid as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> GeneratorConfig {
        let mut config = if self.wide {
            GeneratorConfig::wide(self.width, self.height)
        } else {
            GeneratorConfig::new(self.width, self.height)
        };
        config.seed = self.seed;
        if let Some(trials) = self.trials {
            config.room_trials = trials;
        }
        if let Some(wind) = self.wind {
            config.wind_percent = wind;
        }
        if let Some(chance) = self.extra_connectors {
            config.extra_connector_chance = chance;
        }
        config
    }
}

fn glyph(state: CellState) -> char {
    match state {
        CellState::Wall => '#',
        CellState::Floor => '.',
        CellState::Door => '+',
    }
}

fn render_ascii(dungeon: &Dungeon) -> String {
    let grid = dungeon.grid();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(glyph(grid.state(Pos::new(x, y))));
        }
        out.push('\n');
    }
    out
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let json = args.json;
    let config = args.into_config();

    let dungeon = match generate(&config) {
        Ok(dungeon) => dungeon,
        Err(err) => {
            eprintln!("warren: {err}");
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string(&dungeon) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("warren: {err}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_ascii(&dungeon));
        log::info!("seed {}", dungeon.seed());
    }
}
