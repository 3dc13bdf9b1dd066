// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use alert_queue::alert::{ActionStyle, AlertController, AlertRequest, DisplayBehavior};
use alert_queue::config::{self, Config};
use alert_queue::diagnostics::DiagnosticsCollector;
use alert_queue::error::Result;
use alert_queue::host::{resolve_path, Scene, SceneEvent, SurfaceTree};

const HELP: &str = "\
alert_queue: replays a burst of alerts against a sample surface tree

USAGE:
  alert_queue [OPTIONS]

OPTIONS:
  --behavior <NAME>   default, discard_all or passive (overrides config)
  --config <PATH>     read settings from PATH instead of the user config
  --export <PATH>     write the diagnostics trace as JSON to PATH
  --instant           present and dismiss without animation
  -h, --help          print this help
";

struct Args {
    behavior: Option<DisplayBehavior>,
    config: Option<PathBuf>,
    export: Option<PathBuf>,
    instant: bool,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        behavior: args.opt_value_from_str("--behavior")?,
        config: args.opt_value_from_str("--config")?,
        export: args.opt_value_from_str("--export")?,
        instant: args.contains("--instant"),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        return Err(alert_queue::error::Error::Cli(format!(
            "unexpected arguments: {rest:?}"
        )));
    }
    Ok(Some(parsed))
}

fn main() -> ExitCode {
    match parse_args().and_then(|args| match args {
        Some(args) => run(args),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config: Config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if args.behavior.is_some() {
        config.default_behavior = args.behavior;
    }
    if args.instant {
        config.animated = Some(false);
    }

    let mut collector = DiagnosticsCollector::new(config.buffer_capacity());
    let mut controller = AlertController::from_config(&config);
    controller.set_diagnostics(collector.handle());

    let mut scene = Scene::new();
    let inbox = scene.add_screen("inbox");
    let settings = scene.add_screen("settings");
    let navigation = scene.add_navigation("mail", vec![inbox]);
    let tabs = scene.add_tabs("tab bar", vec![navigation, settings], Some(0));
    scene.set_root(tabs);
    let message = scene.add_screen("message");
    scene.push(navigation, message);

    let animated = controller.animated();
    println!(
        "behavior: {}, animated: {animated}",
        controller.default_behavior()
    );
    report(&scene, &controller, "initial");

    let burst = [
        AlertRequest::new("Sync failed", "Could not reach the server.")
            .with_plain_action("Retry", ActionStyle::Default)
            .with_plain_action("Cancel", ActionStyle::Cancel),
        AlertRequest::titled("Low storage"),
        AlertRequest::new("Sync failed", "Could not reach the server.")
            .with_plain_action("Retry", ActionStyle::Default)
            .with_plain_action("Cancel", ActionStyle::Cancel),
        AlertRequest::message_only("A new version is available."),
    ];
    for request in burst {
        let label = request.label().to_string();
        controller.show_with_defaults(&mut scene, request, || {});
        scene.settle(&mut controller);
        report(&scene, &controller, &format!("show '{label}'"));
    }

    if controller.trigger_action(&mut scene, 0) {
        scene.settle(&mut controller);
        report(&scene, &controller, "tap first action");
    }

    while controller.presented(&scene).is_some() || !controller.queue().is_empty() {
        controller.show_next(&mut scene, animated, || {});
        scene.settle(&mut controller);
        report(&scene, &controller, "show next");
    }

    println!("\nhost history:");
    for event in scene.history() {
        match event {
            SceneEvent::Presented { alert, animated } => {
                println!("  + {alert} (animated: {animated})");
            }
            SceneEvent::Dismissed { alert, animated } => {
                println!("  - {alert} (animated: {animated})");
            }
        }
    }

    collector.process_pending();
    println!("\n{} diagnostic events recorded", collector.len());
    if let Some(path) = args.export {
        collector.export_to_file(&path)?;
        println!("diagnostics written to {}", path.display());
    }
    Ok(())
}

fn report(scene: &Scene, controller: &AlertController, step: &str) {
    let path = scene
        .root()
        .map(|root| resolve_path(scene, root))
        .unwrap_or_default();
    let names: Vec<_> = path
        .iter()
        .map(|id| scene.name(*id).unwrap_or("?"))
        .collect();
    let queued: Vec<_> = controller
        .queue()
        .iter()
        .map(|item| item.alert.label())
        .collect();
    println!("\n[{step}]");
    println!("  path:    {}", names.join(" > "));
    println!(
        "  showing: {}",
        controller.presented(scene).map_or("-", AlertRequest::label)
    );
    println!("  queue:   {queued:?}");
}
