// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::Context;

use the_turnstile::config::{load_and_validate_config, RuntimeBuilder};
use the_turnstile::record::{capture_arg, CallSite};
use the_turnstile::sink::StdoutSink;

const DEFAULT_CONFIG: &str = "configs/demo.yaml";

/// Demo service standing in for intercepted business logic. In a real host
/// the proxy layer would route these calls through the interceptor; here we
/// do it by hand.
struct GreetingService;

impl GreetingService {
    fn greet(&self, name: &str) -> String {
        format!("hello, {}", name)
    }

    fn ping(&self) -> String {
        "pong".to_string()
    }

    fn shrug(&self) -> String {
        "nothing to see here".to_string()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let config_file = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG);

    let config = load_and_validate_config(config_file)
        .with_context(|| format!("loading {}", config_file))?;

    println!("🎟️  the-turnstile demo");
    println!("═════════════════════");
    println!("Config: {}", config_file);
    println!("App:    {}", config.app_name);
    println!();

    let interceptor = RuntimeBuilder::from_config(&config, Arc::new(StdoutSink));
    let service = GreetingService;

    println!("1. GreetingService#greet — type-level around advice, paired lines:");
    let out: Result<String, String> = interceptor.invoke(
        CallSite::new("GreetingService", "greet"),
        || vec![capture_arg("jerry")],
        || Ok(service.greet("jerry")),
    );
    println!("   returned: {:?}", out);
    println!();

    println!("2. GreetingService#ping — method-level before override, one line:");
    let out: Result<String, String> = interceptor.invoke(
        CallSite::new("GreetingService", "ping"),
        Vec::new,
        || Ok(service.ping()),
    );
    println!("   returned: {:?}", out);
    println!();

    println!("3. InventoryService#shrug — undeclared, passes through silently:");
    let out: Result<String, String> = interceptor.invoke(
        CallSite::new("InventoryService", "shrug"),
        Vec::new,
        || Ok(service.shrug()),
    );
    println!("   returned: {:?} (no record lines above — unmatched)", out);

    Ok(())
}
