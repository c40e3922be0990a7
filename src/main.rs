use std::io;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;

use timeconv::core::config::Config;

/// 构造命令行定义
fn build_command() -> Command {
    Command::new("timeconv")
        .version("0.3.0")
        .author("TimeConv Team")
        .about("Convert between Unix epoch seconds and RFC3339 timestamps")
        .arg(
            Arg::new("current")
                .short('c')
                .help("Print the current time")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("local")
                .short('l')
                .help("Use the local timezone for structured output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unix")
                .short('u')
                .help("Print times in Unix seconds regardless of input form")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("add")
                .short('a')
                .help("Add the duration in seconds in the second argument to the time in the first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("diff")
                .short('d')
                .help("Print the difference between two times")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokens")
                .help("Epoch seconds or RFC3339 timestamps")
                .num_args(0..)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

fn config_from_matches(matches: &ArgMatches) -> Config {
    let args = matches
        .get_many::<String>("tokens")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    Config {
        current_time: matches.get_flag("current"),
        local_zone: matches.get_flag("local"),
        epoch_output: matches.get_flag("unix"),
        add_mode: matches.get_flag("add"),
        diff_mode: matches.get_flag("diff"),
        args,
    }
}

/// 解析命令行参数
fn parse_args() -> (Config, bool) {
    let matches = build_command().get_matches();
    let debug = matches.get_flag("debug");
    (config_from_matches(&matches), debug)
}

/// 初始化日志系统
fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    // 诊断走 stderr，标准输出只承载结果行
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let (config, debug_logging) = parse_args();

    init_logging(if debug_logging { "debug" } else { "warn" });
    debug!("configuration: {:?}", config);

    if let Err(e) = timeconv::app::run(&config, &mut io::stdout()) {
        // 错误按约定打印到标准输出
        println!("error: {}", e);
        process::exit(1);
    }
}
