use anyhow::Context;
use cafekit::{
    init_logging, render_document, AllocationPolicy, Config, CustomizationState, DrinkSize,
    OutputFormat, BUILD_DATE, VERSION,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cafekit", version, about = "Render customized café drinks")]
struct Cli {
    /// Configuration file (JSON or TOML); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a drink illustration
    Render(RenderArgs),
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    ShowConfig,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON customization payload; overrides the per-field flags below
    #[arg(long)]
    state: Option<PathBuf>,

    /// Base drink, e.g. "Espresso", "Matcha", "Mocha"
    #[arg(long, default_value = "Espresso")]
    base: String,

    /// Cup size (medium or large)
    #[arg(long, default_value = "medium")]
    size: String,

    #[arg(long)]
    milk: Option<String>,

    #[arg(long)]
    syrup: Option<String>,

    /// Topping name; repeat for several
    #[arg(long = "topping")]
    toppings: Vec<String>,

    #[arg(long)]
    ice: bool,

    /// Sugar level 0-100
    #[arg(long, default_value_t = 0.0)]
    sugar: f64,

    #[arg(long, value_enum, default_value_t = FormatArg::Svg)]
    format: FormatArg,

    /// Override the configured layer allocation policy
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Svg,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    CountFlags,
    VisibleBands,
}

impl From<PolicyArg> for AllocationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::CountFlags => AllocationPolicy::CountFlags,
            PolicyArg::VisibleBands => AllocationPolicy::VisibleBands,
        }
    }
}

impl RenderArgs {
    fn customization(&self) -> anyhow::Result<CustomizationState> {
        if let Some(path) = &self.state {
            let payload = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            return Ok(CustomizationState::from_json(&payload)?);
        }

        let size: DrinkSize = self.size.parse()?;
        let mut state = CustomizationState::new(self.base.clone(), size)
            .with_ice(self.ice)
            .with_sugar_level(self.sugar);
        if let Some(milk) = &self.milk {
            state = state.with_milk(milk.clone());
        }
        if let Some(syrup) = &self.syrup {
            state = state.with_syrup(syrup.clone());
        }
        for topping in &self.toppings {
            state = state.with_topping(topping.clone());
        }
        Ok(state)
    }
}

fn config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::default_path()?),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;
    info!("CafeKit {} (built {})", VERSION, BUILD_DATE);

    let path = config_path(&cli)?;
    match &cli.command {
        Command::Render(args) => {
            let mut config = Config::load_or_default(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            if let Some(policy) = args.policy {
                config.visualizer.allocation_policy = policy.into();
            }
            let state = args.customization()?;
            let document = render_document(&state, &config.visualizer, args.format.into())?;
            match &args.output {
                Some(out) => {
                    std::fs::write(out, &document)
                        .with_context(|| format!("writing {}", out.display()))?;
                    info!("Wrote {}", out.display());
                }
                None => std::io::stdout().write_all(document.as_bytes())?,
            }
        }
        Command::InitConfig { force } => {
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            Config::default()
                .save_to_file(&path)
                .with_context(|| format!("writing config to {}", path.display()))?;
            info!("Wrote default config to {}", path.display());
        }
        Command::ShowConfig => {
            let config = Config::load_or_default(&path)?;
            print!("{}", config.to_toml_string()?);
        }
    }

    Ok(())
}
