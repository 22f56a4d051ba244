use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use kernel::KernelError;

use crate::interpreter::Interpreter;
use crate::module::AppModule;

mod command;
mod display;
mod interpreter;
mod module;

#[tokio::main]
async fn main() -> error_stack::Result<(), KernelError> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "rental.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cli=info,application=info,driver=info,sqlx=warn".into()),
            )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    // the only process-fatal failure: the store must be reachable at startup
    let module = AppModule::new().await?;

    Interpreter::new(module).run().await
}
