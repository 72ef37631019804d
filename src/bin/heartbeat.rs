use info_service::{Heartbeat, Result, setup_tracing};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_tracing();

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::debug!("Interrupt received"),
            Err(e) => {
                // Без обработчика сигнала процесс завершается по умолчанию
                tracing::warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    let mut stdout = std::io::stdout();
    let beats = Heartbeat::new().run(&mut stdout, shutdown).await?;
    tracing::info!("Heartbeat stopped after {} beat(s)", beats);

    Ok(())
}
