use std::process::exit;

use anyhow::{Context, Error};
use clap::{App, Arg};
use log::info;

use udperf_core::{
    stats::human_bytes, DataRate, RunOptions, Runner, UdpTransport,
};

const AFTER_HELPTEXT: &str = include_str!("helptext.txt");

fn main() {
    if let Err(e) = run() {
        eprintln!("udperf: {:#}\n\nSee udperf --help for more info", e);
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let matches = App::new("udperf")
        .version("0.1")
        .about("small tool to generate UDP bandwidth for test")
        .arg(
            Arg::with_name("client")
                .short("c")
                .long("client")
                .value_name("HOST")
                .help("connecting to <host>")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("port")
                .short("p")
                .long("port")
                .value_name("PORT")
                .help("server port to connect to")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("bandwidth")
                .short("b")
                .long("bandwidth")
                .value_name("SIZE")
                .help("test bandwidth in bytes per second")
                .takes_value(true)
                .default_value("10M"),
        )
        .arg(
            Arg::with_name("time")
                .short("t")
                .long("time")
                .value_name("SECONDS")
                .help("test time in seconds")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("raise")
                .short("r")
                .long("raise")
                .help("raise bandwidth gradually before the test"),
        )
        .after_help(AFTER_HELPTEXT)
        .get_matches();

    // required parameters and parameters with defaults, so unwrapping is safe
    let host = matches.value_of("client").unwrap();
    let port: u16 = matches
        .value_of("port")
        .unwrap()
        .parse()
        .context("Failed to parse port as a 16-bit integer")?;
    let bandwidth: DataRate = matches
        .value_of("bandwidth")
        .unwrap()
        .parse()
        .context("Failed to parse bandwidth")?;
    let seconds: u64 = matches
        .value_of("time")
        .unwrap()
        .parse()
        .context("Failed to parse test time as seconds")?;

    let options = RunOptions {
        bandwidth,
        seconds,
        ramp_up: matches.is_present("raise"),
        ..Default::default()
    }
    .validate()?;

    info!(
        "config: host={}:{}, bandwidth={}/s, time={}s, raise={}",
        host,
        port,
        human_bytes(*options.bandwidth),
        options.seconds,
        options.ramp_up
    );

    let mut transport = UdpTransport::connect(host, port)
        .with_context(|| format!("Failed to open a UDP endpoint toward {}:{}", host, port))?;

    Runner::new(options).run(&mut transport)?;
    Ok(())
}
