use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use hikari::{
    hikari_error, hikari_info,
    integrators::Whitted,
    scene::{demo::demo_scene, description},
    settings::Settings,
};

#[derive(Parser)]
#[command(name = "hikari")]
#[command(about = "Whitted-style CPU ray tracer", long_about = None)]
struct Args {
    /// YAML scene description, renders the built-in demo if omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,
    /// YAML render settings
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Output image (format determined by extension: .ppm, .png, .exr)
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[arg(long)]
    max_depth: Option<u32>,
    #[arg(long)]
    epsilon: Option<f64>,
    #[arg(long)]
    no_shadows: bool,
    /// Demo resolution
    #[arg(long, default_value_t = 640)]
    width: usize,
    #[arg(long, default_value_t = 360)]
    height: usize,
}

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

fn run(args: Args, mut settings: Settings) -> hikari::Result<()> {
    if let Some(max_depth) = args.max_depth {
        settings.integrator.max_depth = max_depth;
    }
    if let Some(epsilon) = args.epsilon {
        settings.integrator.epsilon = epsilon;
    }
    if args.no_shadows {
        settings.integrator.shadows = false;
    }

    let (world, camera) = match &args.scene {
        Some(path) => description::load(path)?,
        None => {
            hikari_info!("No scene given, rendering the demo");
            demo_scene(args.width, args.height)?
        }
    };

    let integrator = Whitted::new(settings.integrator);
    let film = camera.render(&world, &integrator)?;

    let output = args
        .output
        .or(settings.output)
        .unwrap_or_else(|| PathBuf::from("out.ppm"));
    film.write(&output)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(why) => {
                eprintln!("Failed to load settings '{}': {}", path.to_string_lossy(), why);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    if let Err(why) = setup_logger(settings.log_level.into()) {
        panic!("{}", why);
    };

    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            hikari_error!("{}", why);
            ExitCode::FAILURE
        }
    }
}
