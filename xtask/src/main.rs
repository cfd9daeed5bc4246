use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

struct LambdaFunction {
    bin: &'static str,
    artifact: &'static str,
}

/// Lambda binaries shipped from `report_lambda`, one zip per function.
const LAMBDA_FUNCTIONS: [LambdaFunction; 3] = [
    LambdaFunction {
        bin: "daily_report_lambda",
        artifact: "daily_report.zip",
    },
    LambdaFunction {
        bin: "text_report_lambda",
        artifact: "text_report.zip",
    },
    LambdaFunction {
        bin: "status_lambda",
        artifact: "status.zip",
    },
];

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the report lambdas workspace",
    long_about = "A unified CLI for CI checks and Lambda packaging\n\
                  in the report lambdas workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build and package Rust Lambda artifacts for Terraform inputs
    ServerlessPackage {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for binaries
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
        /// Directory receiving the zip artifacts
        #[arg(long, env = "REPORT_LAMBDA_DIST_DIR", default_value = "infra/report_lambdas/dist")]
        dist_dir: String,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting and clippy
    Lint,
    /// Unit and integration tests
    Test,
    /// Run lint + test
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_serverless_lambdas(target: &str, profile: BuildProfile, dist_dir: &Path) {
    step("Build report lambda binaries");

    let mut cargo_args = vec!["build", "-p", "report_lambda", "--target", target];
    for function in LAMBDA_FUNCTIONS {
        cargo_args.push("--bin");
        cargo_args.push(function.bin);
    }
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package report lambda zip artifacts");
    let target_dir = Path::new("target").join(target).join(profile.dir_name());
    fs::create_dir_all(dist_dir).expect("failed to create lambda dist directory");

    for function in LAMBDA_FUNCTIONS {
        let zip_path = dist_dir.join(function.artifact);
        if let Err(error) = package_function(&target_dir.join(function.bin), &zip_path) {
            eprintln!("error: {error}");
            exit(1);
        }
        eprintln!("- {} -> {}", function.bin, zip_path.display());
    }
}

fn package_function(binary_path: &Path, zip_path: &Path) -> Result<(), String> {
    let binary = fs::read(binary_path).map_err(|error| {
        format!(
            "failed to read lambda binary '{}': {error}",
            binary_path.display()
        )
    })?;
    let mut archive = Cursor::new(Vec::new());
    write_bootstrap_zip(&binary, &mut archive)?;
    fs::write(zip_path, archive.into_inner())
        .map_err(|error| format!("failed to write '{}': {error}", zip_path.display()))
}

/// The provided.al2023 runtime executes a file named `bootstrap` at the archive root.
fn write_bootstrap_zip<W: Write + Seek>(binary: &[u8], writer: W) -> Result<(), String> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .map_err(|error| format!("failed to start bootstrap entry: {error}"))?;
    zip.write_all(binary)
        .map_err(|error| format!("failed to write bootstrap entry: {error}"))?;
    zip.finish()
        .map(|_| ())
        .map_err(|error| format!("failed to finish lambda zip: {error}"))
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_lint() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);
}

fn ci_test() {
    step("Test report_core");
    run_cargo(&["test", "-p", "report_core"]);

    step("Test report_lambda");
    run_cargo(&["test", "-p", "report_lambda"]);

    step("Test xtask packaging");
    run_cargo(&["test", "-p", "xtask"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { job } => {
            match job {
                CiJob::Lint => ci_lint(),
                CiJob::Test => ci_test(),
                CiJob::Check => {
                    ci_lint();
                    ci_test();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage {
            target,
            profile,
            dist_dir,
        } => {
            package_serverless_lambdas(&target, profile, Path::new(&dist_dir));
        }
    }
}
