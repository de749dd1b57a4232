use clinic_protocol::{MsgToHost, ipc::host_channel};
use tracing::info;
use tracing_subscriber::prelude::*;

#[test]
fn forwards_page_logs_to_host_until_cleared() {
    let (tx, mut rx) = host_channel();
    logging::forward::set_sink(tx);

    let subscriber = tracing_subscriber::registry().with(logging::forward::layer());

    tracing::subscriber::with_default(subscriber, || {
        info!(target: "clinic_engine::page", revision = 4, "config_applied");

        match rx.try_recv() {
            Ok(MsgToHost::Log {
                level,
                target,
                message,
            }) => {
                assert_eq!(level, "INFO");
                assert_eq!(target, "clinic_engine::page");
                assert_eq!(message, "config_applied revision=4");
            }
            other => panic!("expected forwarded log, got: {:?}", other),
        }

        logging::forward::clear_sink();
        info!(target: "clinic_engine::page", "this should not forward");
        assert!(rx.try_recv().is_err());
    });
}
