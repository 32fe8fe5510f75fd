//! Preview helper for the narrative page: `cargo run` compiles the wasm
//! bundle into `static/pkg` and serves the site on a local port.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8080";

fn main() {
    // The helper only makes sense on the host.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    println!("building wasm bundle into static/pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack reported errors; fix those before previewing");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found (https://rustwasm.github.io/wasm-pack/); \
                 serving whatever is already in static/pkg"
            );
        }
    }

    println!("serving static/ at http://127.0.0.1:{PORT}");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");

    // Stay up as long as the server child does.
    loop {
        if let Ok(Some(status)) = server.try_wait() {
            eprintln!("http server exited: {status}");
            std::process::exit(1);
        }
        thread::sleep(Duration::from_secs(1));
    }
}
