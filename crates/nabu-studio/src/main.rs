use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nabu_engine::backend::{BackendRegistry, HeadlessBackend, NullBackend, RenderBackendInit};
use nabu_engine::coords::{CoordinateTransformer, Vec2};
use nabu_engine::logging::{init_logging, LoggingConfig, RenderLogLevel, RenderLogSink, RenderLoggerConfig};
use nabu_engine::render::{layout_hit_test_topmost, LayoutBox, RenderContext};

/// Drives a renderer backend through init, a resize, a few frames and teardown.
#[derive(Debug, Parser)]
#[command(name = "nabu-studio", version)]
struct Args {
    /// Backend id to use; falls back to the first registered backend.
    #[arg(long)]
    renderer: Option<String>,

    /// Enable render command logging.
    #[arg(long)]
    render_log: bool,

    /// Render log sink: stdout, file or ring. Implies --render-log.
    #[arg(long)]
    render_log_sink: Option<RenderLogSink>,

    /// Log file path for the file sink. Implies --render-log.
    #[arg(long)]
    render_log_target: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    render_log_level: RenderLogLevel,

    /// Keep the most recent N render log entries in memory.
    #[arg(long, default_value_t = 32)]
    ring_capacity: usize,

    #[arg(long, default_value_t = 4)]
    frames: u32,

    #[arg(long, default_value_t = 1.0)]
    dpi_scale: f32,

    #[arg(long, default_value_t = 1.0)]
    ui_scale: f32,

    /// Viewport width in logical units.
    #[arg(long, default_value_t = 820.0)]
    width: f32,

    /// Viewport height in logical units.
    #[arg(long, default_value_t = 560.0)]
    height: f32,
}

impl Args {
    fn logger_config(&self) -> RenderLoggerConfig {
        RenderLoggerConfig {
            sink: self.render_log_sink.unwrap_or_default(),
            sink_target: self.render_log_target.clone(),
            ring_capacity: self.ring_capacity,
            level: self.render_log_level,
            enabled: self.render_log || self.render_log_sink.is_some() || self.render_log_target.is_some(),
        }
    }
}

/// Header, side panel, two buttons.
fn sample_widgets(viewport: Vec2) -> Vec<LayoutBox> {
    vec![
        LayoutBox::new(0.0, 0.0, viewport.x, 48.0),
        LayoutBox::new(0.0, 48.0, 200.0, viewport.y - 48.0),
        LayoutBox::new(16.0, 72.0, 168.0, 32.0),
        LayoutBox::new(16.0, 116.0, 168.0, 32.0),
    ]
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse();

    let viewport = Vec2::new(args.width, args.height);
    let mut transformer = CoordinateTransformer::new(args.dpi_scale, args.ui_scale, viewport);
    let widgets = sample_widgets(viewport);
    let logger_config = args.logger_config();

    let mut registry = BackendRegistry::new();
    registry.register(Box::new(HeadlessBackend::new("headless")))?;
    registry.register(Box::new(NullBackend::new("null")))?;

    let backend = registry
        .resolve_mut(args.renderer.as_deref())
        .context("no renderer backends registered")?;
    log::info!("using renderer backend '{}'", backend.id());

    backend
        .init(&RenderBackendInit {
            widgets: &widgets,
            logger_config: Some(&logger_config),
            ..RenderBackendInit::new(transformer)
        })
        .with_context(|| format!("failed to initialize backend '{}'", backend.id()))?;

    for frame in 0..args.frames {
        // Simulate the window moving to a denser display halfway through.
        if frame == args.frames / 2 {
            transformer.reinit(transformer.dpi_scale() * 2.0, transformer.ui_scale(), viewport);
            backend.update_transformer(&transformer);
        }
        backend.draw();
    }

    // Input path: a pointer in device pixels, hit-tested in logical space.
    let ctx = RenderContext::from_viewport(&transformer);
    let layouts: Vec<_> = widgets.iter().map(|w| ctx.resolve(w)).collect();
    let pointer = transformer.screen_to_logical(Vec2::new(80.0, 160.0));
    match layout_hit_test_topmost(&layouts, pointer) {
        Some(i) => log::info!("pointer {pointer:?} hits widget {i}"),
        None => log::info!("pointer {pointer:?} hits nothing"),
    }

    if let Some(ring) = backend.logger().ring() {
        println!("last {} of {} render commands:", ring.len(), ring.total_written());
        for entry in ring.iter() {
            println!(
                "  [{}] {} ({}) {:.3}ms",
                entry.backend_id, entry.command, entry.parameters, entry.duration_ms
            );
        }
    }

    backend.cleanup();
    Ok(())
}
