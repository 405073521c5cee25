//! filecipher CLI — password-based file encryption
//!
//! Usage:
//!   filecipher encrypt <FILE> [-o <OUT>] [--force] [--password-file <PATH>]
//!   filecipher decrypt <FILE>.encrypted [-o <OUT>] [--force] [--password-file <PATH>]
//!   filecipher inspect <FILE>.encrypted

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use filecipher::{inspect, naming, sniff, FileCipher, Password};

#[derive(Parser)]
#[command(
    name = "filecipher",
    version,
    about = "Password-based file encryption (PBKDF2-SHA256 + AES-256-GCM)"
)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "FILECIPHER_LOG_FORMAT",
        default_value = "text"
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a file to <FILE>.encrypted
    Encrypt(CipherArgs),
    /// Decrypt a file, stripping the .encrypted suffix
    Decrypt(CipherArgs),
    /// Show container metadata (no password, no decryption)
    Inspect {
        input: PathBuf,
    },
}

#[derive(Args)]
struct CipherArgs {
    input: PathBuf,

    /// Output path (default derived from the input name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    force: bool,

    /// Read the password from the first line of a file
    #[arg(long)]
    password_file: Option<PathBuf>,
}

/// Password source for non-interactive use. Never accepted as a flag.
const PASSWORD_ENV: &str = "FILECIPHER_PASSWORD";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    let result = match &cli.command {
        Command::Encrypt(args) => cmd_encrypt(args),
        Command::Decrypt(args) => cmd_decrypt(args),
        Command::Inspect { input } => cmd_inspect(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool, format: LogFormat) {
    let env_filter = if verbose {
        EnvFilter::new("filecipher=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "filecipher=warn".into())
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().with_target(true).init(),
        LogFormat::Text => builder.init(),
    }
}

fn cmd_encrypt(args: &CipherArgs) -> Result<()> {
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| naming::encrypted_path(&args.input));
    check_output(&args.input, &out_path, args.force)?;

    let password = Password::new(read_password(args, true)?.as_str())?;
    let plaintext = fs::read(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;

    let container = FileCipher::new().encrypt(&plaintext, password.as_str())?;
    write_output(&out_path, &container, args.force)?;

    eprintln!(
        "encrypted {} -> {} ({} bytes plaintext -> {} bytes container)",
        args.input.display(),
        out_path.display(),
        plaintext.len(),
        container.len()
    );
    Ok(())
}

fn cmd_decrypt(args: &CipherArgs) -> Result<()> {
    let out_path = args
        .output
        .clone()
        .unwrap_or_else(|| naming::decrypted_path(&args.input));
    check_output(&args.input, &out_path, args.force)?;

    let container = fs::read(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let password = read_password(args, false)?;

    let plaintext = Zeroizing::new(FileCipher::new().decrypt(&container, &password)?);
    write_output(&out_path, &plaintext, args.force)?;

    let content_type = sniff::sniff_or_default(&plaintext);
    info!(mime = content_type.mime, "detected content type");
    eprintln!(
        "decrypted {} -> {} ({} bytes container -> {} bytes plaintext, {})",
        args.input.display(),
        out_path.display(),
        container.len(),
        plaintext.len(),
        content_type.mime
    );
    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let info = inspect(&data)?;
    println!("{}", info);
    Ok(())
}

/// Password order: --password-file, `PASSWORD_ENV`, interactive prompt.
fn read_password(args: &CipherArgs, confirm: bool) -> Result<Zeroizing<String>> {
    if let Some(path) = &args.password_file {
        debug!(path = %path.display(), "reading password file");
        let contents = Zeroizing::new(
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?,
        );
        let line = contents.lines().next().unwrap_or_default();
        return Ok(Zeroizing::new(line.to_string()));
    }
    if let Ok(password) = env::var(PASSWORD_ENV) {
        return Ok(Zeroizing::new(password));
    }

    let first = Zeroizing::new(rpassword::prompt_password("Password: ").context("read password")?);
    if confirm {
        let second = Zeroizing::new(
            rpassword::prompt_password("Confirm password: ").context("read password")?,
        );
        if *first != *second {
            bail!("passwords do not match");
        }
    }
    Ok(first)
}

fn check_output(input: &Path, output: &Path, force: bool) -> Result<()> {
    if input == output {
        bail!("output path would overwrite input: {}", output.display());
    }
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }
    Ok(())
}

/// Write via a temp file in the target directory, renamed into place on
/// success. A failed write leaves no output behind and never truncates an
/// existing file. The temp file is created owner-only (0600 on Unix).
fn write_output(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("create temp file in {}", parent.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    tmp.as_file()
        .sync_all()
        .with_context(|| format!("sync {}", path.display()))?;

    let persisted = if force {
        tmp.persist(path)
    } else {
        tmp.persist_noclobber(path)
    };
    persisted
        .map_err(|e| e.error)
        .with_context(|| format!("create {}", path.display()))?;
    Ok(())
}
