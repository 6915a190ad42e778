#![cfg_attr(test, allow(unused_crate_dependencies))]

use anyhow::Context;
use clap::crate_version;
use minigraph_config::DatasetConfig;
use minigraph_engine::{Dataset, Engine, EntityStore};

mod args;
mod demo;
mod telemetry;

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    let config = args.config()?;

    telemetry::init(&config.log);

    let crate_version = crate_version!();
    tracing::info!("minigraph {crate_version}");

    let engine = Engine::new(load_store(&config.dataset)?, config.engine.clone());

    let output = if args.demo {
        let mut output = Vec::with_capacity(demo::REQUESTS.len());

        for demo in demo::REQUESTS {
            tracing::info!("replaying demo request: {}", demo.title);

            let response = engine.execute(demo.request);
            output.push(serde_json::json!({
                "title": demo.title,
                "request": demo.request,
                "response": serde_json::to_value(&response)?,
            }));
        }

        serde_json::Value::Array(output)
    } else {
        let request = args.request()?;
        serde_json::to_value(engine.execute(&request))?
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    println!("{output}");

    Ok(())
}

fn load_store(config: &DatasetConfig) -> anyhow::Result<EntityStore> {
    let Some(path) = &config.path else {
        tracing::debug!("no dataset configured, using the demo data");
        return Ok(EntityStore::demo());
    };

    let dataset = Dataset::load(path).with_context(|| format!("could not load dataset {}", path.display()))?;
    let store = EntityStore::new(dataset).with_context(|| format!("invalid dataset {}", path.display()))?;

    Ok(store)
}
