use ringlog::*;

mod config;

use config::LogConfig;

fn main() {
    let config = LogConfig::new()
        .level(Level::Info)
        .queue_depth(1024)
        .single_message_size(512);

    let log = LogBuilder::new()
        .output(Box::new(Stderr::new()))
        .log_queue_depth(config.log_queue_depth())
        .single_message_size(config.log_single_message_size())
        .format(ringlog::default_format)
        .build()
        .expect("failed to initialize log");

    let mut drain = MultiLogBuilder::new()
        .level_filter(config.log_level().to_level_filter())
        .default(log)
        .build()
        .start();

    info!("running demonstration");

    let stdout = std::io::stdout();
    let result = timefield::demo::run(&mut stdout.lock());

    if let Err(e) = &result {
        error!("failed to write demonstration output: {e}");
    }

    let _ = drain.flush();

    if result.is_err() {
        std::process::exit(1);
    }
}
