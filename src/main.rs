//! diagtap - baseband diagnostic framing and GSMTAP tooling
//!
//! Command-line front end for the frame codec and the capture header encoder.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use diagtap::config::{self, Config};
use diagtap::gsmtap::{
    Channel, DeviceTimestamp, GsmtapHeader, GsmtapVersion, LteRrcType, PayloadType, UmtsRrcType,
    GSMTAP_UDP_PORT,
};
use diagtap::protocol::{self, log_mask::LogMask, ParsedFrame};

/// diagtap - diagnostic frame codec and GSMTAP header encoder
#[derive(Parser)]
#[command(name = "diagtap")]
#[command(version)]
#[command(about = "Frame diagnostic requests and encode GSMTAP headers", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the frame CRC16 of a hex payload
    Crc {
        /// Payload bytes as hex
        payload: String,
    },

    /// Build a wire frame
    Frame {
        /// Payload bytes as hex
        #[arg(required_unless_present = "log_mask", conflicts_with = "log_mask")]
        payload: Option<String>,

        /// Frame an embedded log-enable request instead
        #[arg(short, long, value_enum)]
        log_mask: Option<LogMask>,
    },

    /// Take a wire frame apart and verify its CRC
    Parse {
        /// Frame bytes as hex, including the trailing 7e
        frame: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode a GSMTAP header
    Gsmtap {
        /// Header version (2 or 3), defaults to the configured one
        #[arg(long)]
        header_version: Option<u8>,

        /// Payload type
        #[arg(short = 't', long, value_enum, default_value_t = PayloadType::Um)]
        payload_type: PayloadType,

        /// Sub type code (channel or RRC message type)
        #[arg(short, long, default_value_t = 0)]
        sub_type: u8,

        #[arg(long, default_value_t = 0)]
        timeslot: u8,

        #[arg(short, long, default_value_t = 0)]
        arfcn: u16,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        signal_dbm: i8,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        snr_db: i8,

        #[arg(short, long, default_value_t = 0)]
        frame_number: u32,

        #[arg(long, default_value_t = 0)]
        sub_slot: u8,

        /// Device timestamp in 1/800 s ticks since 1980-01-06 (version 3)
        #[arg(long)]
        device_ticks: Option<u64>,

        /// Message to place after the header, as hex
        #[arg(short, long)]
        payload: Option<String>,
    },

    /// Show current configuration
    Config {
        /// Generate sample configuration
        #[arg(long)]
        generate: bool,

        /// Output path for generated config
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List protocol identifiers and embedded log masks
    Info,
}

/// Outcome of `diagtap parse`
#[derive(Serialize)]
struct FrameReport {
    payload: String,
    received_crc: u16,
    computed_crc: u16,
    crc_ok: bool,
}

impl From<&ParsedFrame> for FrameReport {
    fn from(frame: &ParsedFrame) -> Self {
        Self {
            payload: hex::encode(&frame.payload),
            received_crc: frame.received_crc,
            computed_crc: frame.computed_crc,
            crc_ok: frame.crc_ok(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        Config::load(config_path)?
    } else {
        Config::load_default().unwrap_or_default()
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(config.log_filter(cli.verbose)))
        .init();

    match cli.command {
        Commands::Crc { payload } => {
            let payload = parse_hex(&payload)?;
            println!("{:#06x}", protocol::checksum(&payload));
        }
        Commands::Frame { payload, log_mask } => {
            let frame = match (log_mask, payload) {
                (Some(mask), _) => {
                    tracing::info!("Framing {} log mask ({} bytes)", mask.name(), mask.payload().len());
                    mask.frame()
                }
                (None, Some(payload)) => protocol::build_frame(&parse_hex(&payload)?),
                (None, None) => anyhow::bail!("Please specify a payload or --log-mask"),
            };
            println!("{}", hex::encode(frame));
        }
        Commands::Parse { frame, json } => {
            run_parse(&frame, json)?;
        }
        Commands::Gsmtap {
            header_version,
            payload_type,
            sub_type,
            timeslot,
            arfcn,
            signal_dbm,
            snr_db,
            frame_number,
            sub_slot,
            device_ticks,
            payload,
        } => {
            let version = match header_version {
                Some(v) => GsmtapVersion::try_from(v)?,
                None => config.gsmtap.version,
            };

            let mut header = GsmtapHeader {
                timeslot,
                arfcn,
                signal_dbm,
                snr_db,
                frame_number,
                sub_type,
                antenna_nr: config.gsmtap.antenna_nr,
                sub_slot,
                ..GsmtapHeader::new(version, payload_type)
            };
            if let Some(ticks) = device_ticks {
                if version == GsmtapVersion::V2 {
                    tracing::warn!("Version 2 headers carry no device time, ignoring --device-ticks");
                }
                header = header.with_device_time(DeviceTimestamp::from_ticks(ticks));
            }

            let encoded = match payload {
                Some(payload) => header.encapsulate(&parse_hex(&payload)?).to_vec(),
                None => header.encode(),
            };
            tracing::debug!("Encoded {:?}", header);
            println!("{}", hex::encode(encoded));
        }
        Commands::Config { generate, output } => {
            if generate {
                let sample = config::generate_sample_config()?;
                if let Some(path) = output {
                    std::fs::write(&path, &sample)?;
                    println!("Configuration written to: {}", path.display());
                } else {
                    println!("{}", sample);
                }
            } else {
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
        Commands::Info => {
            print_info();
        }
    }

    Ok(())
}

/// Decode hex input, ignoring whitespace so pasted dumps work
fn parse_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).with_context(|| format!("Invalid hex input: {}", input))
}

fn run_parse(input: &str, json: bool) -> anyhow::Result<()> {
    let raw = parse_hex(input)?;
    let frame = ParsedFrame::parse(&raw)?;
    let report = FrameReport::from(&frame);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Payload: {}", report.payload);
        println!(
            "CRC:     {:#06x} (computed {:#06x}) {}",
            report.received_crc,
            report.computed_crc,
            if report.crc_ok { "OK" } else { "MISMATCH" }
        );
    }

    // Exit non-zero on a corrupted frame
    frame.into_verified()?;
    Ok(())
}

fn print_info() {
    println!("diagtap Protocol Information");
    println!("============================\n");

    println!("Frame terminator: {:#04x}", protocol::FLAG);
    println!("Escape byte:      {:#04x}", protocol::ESC);
    println!("GSMTAP UDP port:  {}", GSMTAP_UDP_PORT);

    println!("\nLog masks:");
    for mask in LogMask::ALL {
        println!("  {:<8} {} bytes", mask.name(), mask.payload().len());
    }

    println!("\nPayload types:");
    for t in PayloadType::ALL {
        println!("  {:#04x}  {}", t.code(), t);
    }

    println!("\nChannels:");
    for c in Channel::ALL {
        println!("  {:#04x}  {}", c.code(), c);
    }

    println!("\nUMTS RRC message types:");
    for t in UmtsRrcType::ALL {
        println!("  {:>3}  {}", t.code(), t);
    }

    println!("\nLTE RRC message types:");
    for t in LteRrcType::ALL {
        println!("  {:>3}  {}", t.code(), t);
    }
}
