//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on a local HTTP server.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::path::PathBuf;
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context};
    use clap::Parser;

    #[derive(Debug, Parser)]
    #[command(about = "Build the sketch and serve it locally")]
    pub struct Args {
        /// Port for the local HTTP server.
        #[arg(short, long, default_value_t = 8000)]
        pub port: u16,

        /// Directory served as the site root; the package is written to `<dir>/pkg`.
        #[arg(long, default_value = "static")]
        pub static_dir: PathBuf,

        /// Serve whatever is already in the static directory.
        #[arg(long)]
        pub skip_build: bool,
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        if !args.skip_build {
            build_package(&args)?;
        }

        log::info!(
            "serving {} at http://127.0.0.1:{}",
            args.static_dir.display(),
            args.port
        );
        let status = Command::new("python3")
            .arg("-m")
            .arg("http.server")
            .arg(args.port.to_string())
            .arg("--directory")
            .arg(&args.static_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .context("failed to start http server")?;

        if !status.success() {
            bail!("http server exited with {status}");
        }
        Ok(())
    }

    fn build_package(args: &Args) -> anyhow::Result<()> {
        let out_dir = args.static_dir.join("pkg");
        log::info!("building WASM package into {} …", out_dir.display());

        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir"])
            .arg(&out_dir)
            .status()
        {
            Ok(st) if st.success() => Ok(()),
            Ok(st) => bail!(
                "wasm-pack finished with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
            ),
            Err(_) => {
                log::warn!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
                Ok(())
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    host::run(host::Args::parse())
}

// The wasm32 build only needs the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
