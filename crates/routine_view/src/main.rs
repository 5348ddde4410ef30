use std::sync::Arc;

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use routine_client::config::Config;
use routine_client::http_client::ReqwestRoutineClient;
use routine_view::charts::ChartData;
use routine_view::cli::{Cli, Command, env_filter, list_output, log_filter};
use routine_view::{RoutineService, build_view, filter_and_sort};

fn init_logging() {
    let log_env = log_filter();
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter(&log_env))
        .init();
    tracing::debug!(%log_env, "routine_view: log filter");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let metrics = PrometheusBuilder::new().install_recorder()?;

    let config = Config::from_env()?;
    let client = ReqwestRoutineClient::from_config(&config);
    let service = RoutineService::new(Arc::new(client));

    match cli.command {
        Command::List(args) => {
            let state = args.view_state()?;
            let collections = service.fetch_collections().await?;
            let view = build_view(&collections, &state.params())?;
            println!("{}", serde_json::to_string_pretty(&list_output(&view)?)?);
        }
        Command::Charts(args) => {
            let collections = service.fetch_collections().await?;
            let rows = filter_and_sort(
                &collections,
                args.search.filter,
                &args.search.search,
                args.sort.spec(),
            );
            let charts = ChartData::from_routines(&rows);
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }
        Command::Delete { id } => {
            let mut collections = service.fetch_collections().await?;
            service.delete_routine(&mut collections, &id).await?;
            println!(
                "Routine deleted successfully! {} routines remaining.",
                collections.routines().len()
            );
        }
    }

    tracing::debug!(metrics = %metrics.render(), "routine_view: counters");
    Ok(())
}
