//! Solid Pod CLI - run one pod operation from the command line.
//!
//! Constructs a single PodClient for the given pod URL and dispatches one
//! command to it. Publishing and container creation are best-effort and exit
//! successfully even when the pod could not be reached; reads and updates fail
//! the process when the read fails.

mod command;

use anyhow::Result;
use clap::Parser;
use command::{Args, Command};
use solid_pod_core::PodClient;
use std::time::Duration;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let mut builder = PodClient::builder(&args.pod_url);
    if let Some(template) = &args.template {
        builder = builder.container_template(template);
    }
    if let Some(secs) = args.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let pod = builder.build()?;

    debug!("Running {:?}", args.command);
    match args.command {
        Command::CreateContainer { name } => {
            pod.create_container(&name).await;
        }
        Command::Publish {
            container,
            file,
            values,
        } => {
            pod.publish_data(&container, &file, values.as_slice()).await;
        }
        Command::Read {
            container,
            file,
            json,
        } => {
            let records = pod.read_data(&container, &file).await?;
            // Records go to stdout; logs go to stderr
            println!("{}", command::render_records(&records, json)?);
        }
        Command::Update {
            container,
            file,
            values,
        } => {
            pod.update_data(&container, &file, values.as_slice()).await?;
        }
    }

    Ok(())
}
