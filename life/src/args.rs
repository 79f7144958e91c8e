use anyhow::{bail, Context};
use shared::config::{DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TEXT_SPEED};

pub const USAGE: &str = "\
Life Cell Simulator

Usage: life [OPTIONS]

Options:
  --rows <N>         Number of rows in the grid [default: 20]
  --cols <N>         Number of columns in the grid [default: 30]
  --cell_size <PX>   Size of each cell in pixels, GUI only [default: 20]
  --speed <SECS>     Seconds between generations, text mode only [default: 0.5]
  --seed <N>         Seed the random grid for a reproducible run
  --gui              Force graphical mode
  --text             Force text-only mode
  -h, --help         Print this help";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: u32,
    pub speed: f64,
    pub seed: Option<u64>,
    pub gui: bool,
    pub text: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: DEFAULT_CELL_SIZE,
            speed: DEFAULT_TEXT_SPEED,
            seed: None,
            gui: false,
            text: false,
            help: false,
        }
    }
}

/// Parses everything after the program name. Accepts `--flag value` and `--flag=value`.
pub fn parse<I, S>(argv: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = Args::default();
    let mut argv = argv.into_iter().map(Into::into);

    while let Some(arg) = argv.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> anyhow::Result<String> {
            match inline.clone().or_else(|| argv.next()) {
                Some(value) => Ok(value),
                None => bail!("missing value for {}", name),
            }
        };

        match flag.as_str() {
            "--rows" => args.rows = parse_number(&value("--rows")?, "--rows")?,
            "--cols" => args.cols = parse_number(&value("--cols")?, "--cols")?,
            "--cell_size" | "--cell-size" => {
                args.cell_size = parse_number(&value("--cell_size")?, "--cell_size")?;
            }
            "--speed" => args.speed = parse_number(&value("--speed")?, "--speed")?,
            "--seed" => args.seed = Some(parse_number(&value("--seed")?, "--seed")?),
            "--gui" => args.gui = true,
            "--text" => args.text = true,
            "-h" | "--help" => args.help = true,
            other => bail!("unexpected argument '{}'\n\n{}", other, USAGE),
        }
    }

    validate(&args)?;
    Ok(args)
}

fn parse_number<T>(raw: &str, name: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .with_context(|| format!("invalid value '{}' for {}", raw, name))
}

fn validate(args: &Args) -> anyhow::Result<()> {
    if args.rows == 0 {
        bail!("--rows must be greater than 0");
    }
    if args.cols == 0 {
        bail!("--cols must be greater than 0");
    }
    if args.cell_size == 0 {
        bail!("--cell_size must be greater than 0");
    }
    if !args.speed.is_finite() || args.speed <= 0.0 {
        bail!("--speed must be a positive number of seconds");
    }
    Ok(())
}
