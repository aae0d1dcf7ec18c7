//! Interpret voice command transcripts from the command line
//!
//! ```text
//! cargo run -p voice-command-llm --example interpret -- "Mumbai के hot leads दिखाओ"
//! VOICE_COMMAND_ENV=dev RUST_LOG=debug cargo run -p voice-command-llm --example interpret -- "dhundho cotton"
//! ```
//!
//! With no arguments a few sample transcripts are interpreted.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use voice_command_config::{load_settings, Settings};
use voice_command_core::BusinessContext;
use voice_command_llm::TieredDispatcher;

const SAMPLES: &[&str] = &[
    "show me hot leads in mumbai",
    "surat mein cotton dhundho",
    "પેમેન્ટ બતાવો",
    "Mumbai के hot leads दिखाओ",
    "why not",
];

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("voice_command={level},interpret={level}").into()
    });

    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("VOICE_COMMAND_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Warning: failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };
    init_tracing(&settings);

    let dispatcher = TieredDispatcher::from_settings(&settings)?;
    let context = BusinessContext::new().with_leads(12).with_payments(4);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let transcripts: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for transcript in transcripts {
        let outcome = dispatcher
            .process_with_context(transcript, context.clone())
            .await;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    let usage = dispatcher.usage();
    tracing::info!(
        calls = usage.calls,
        cost_usd = usage.cost_usd,
        remaining = usage.remaining(),
        "AI usage this month"
    );

    Ok(())
}
