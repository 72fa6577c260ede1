use clap::Parser;
use dicedist::{DiceError, EvalContext, Limits, Roller, Tabulate};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dicedist", version, about, long_about = None)]
struct Cli {
    /// Expression to evaluate. Without one, every line of stdin is evaluated.
    expression: Vec<String>,

    /// Print this many sampled outcomes instead of the distribution
    #[arg(long, short)]
    roll: Option<usize>,

    /// Seed for sampling
    #[arg(long, short)]
    seed: Option<u64>,

    /// Largest accepted dice count, as in `100d6`
    #[arg(long, default_value_t = Limits::default().max_dice)]
    max_dice: usize,

    /// Largest number of distinct outcomes of any intermediate result
    #[arg(long, default_value_t = Limits::default().max_outcomes)]
    max_outcomes: usize,
}

fn run<R: Roller>(
    s: &str,
    ctx: &mut EvalContext,
    rolls: Option<usize>,
    rng: &mut R,
) -> Result<(), DiceError> {
    let value = ctx.eval(&dicedist::parse(s)?)?;
    match rolls {
        Some(n) => {
            for _ in 0..n {
                println!("{}", value.roll(rng));
            }
        }
        None => print!("{}", value.table()?),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    let mut ctx = EvalContext::new(Limits {
        max_dice: args.max_dice,
        max_outcomes: args.max_outcomes,
    });
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut failed = false;
    let mut evaluate = |s: &str| {
        if let Err(why) = run(s, &mut ctx, args.roll, &mut rng) {
            log::debug!("{:?} failed: {:?}", s, why);
            eprintln!("Error: {}", why);
            failed = true;
        }
    };

    if args.expression.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => evaluate(&line),
                Err(why) => {
                    eprintln!("Error: {}", why);
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        evaluate(&args.expression.join(" "));
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
