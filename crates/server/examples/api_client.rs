//! Walk through the catalog API against a running server.
//!
//! Start the server with `cargo run -p appmeta-server`, then run
//! `cargo run -p appmeta-server --example api_client`.

use reqwest::Client;

const SERVER_URL: &str = "http://localhost:8080";

const APP: &str = "title: Valid App 1
version: 0.0.1
maintainers:
- name: firstmaintainer app1
  email: firstmaintainer@hotmail.com
company: Random Inc.
website: https://website.com
source: https://github.com/random/repo
license: Apache-2.0
description: |
  ### Interesting Title
  Some application content, and description
";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("2. Create Application:");
    let resp = client
        .put(format!("{SERVER_URL}/create"))
        .header("content-type", "application/yaml")
        .body(APP)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!();

    println!("3. Create Again (conflict):");
    let resp = client
        .put(format!("{SERVER_URL}/create"))
        .body(APP)
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body:\n{}", resp.text().await?);

    println!("4. Search By Version:");
    let resp = client
        .post(format!("{SERVER_URL}/search"))
        .body("version: 0.0.1\n")
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body:\n{}", resp.text().await?);

    println!("5. Search By Maintainer Email:");
    let resp = client
        .post(format!("{SERVER_URL}/search"))
        .body("maintainers:\n- email: firstmaintainer@hotmail.com\n")
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body:\n{}", resp.text().await?);

    println!("6. Metrics:");
    let resp = client.get(format!("{SERVER_URL}/metrics")).send().await?;
    println!("Body: {}", resp.text().await?);

    Ok(())
}
