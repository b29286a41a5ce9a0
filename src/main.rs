#[tokio::main(flavor = "current_thread")]
async fn main() {
    ticket_report_lib::logging::init_logging();

    if let Err(err) = ticket_report_lib::run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}
