use clap::{App, Arg, ArgMatches};
use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use std::{error::Error, io, process};
use uniprocessor_scheduler::{
    compare_all, config, input,
    scheduler::{Algorithm, ProcessTable, Report, ReportViewer},
    run, SchedError,
};

fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    if let Err(err) = run_with_args(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn cli() -> App<'static, 'static> {
    App::new("uniprocessor-scheduler")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Simulates classical uniprocessor scheduling algorithms")
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .possible_values(&["fcfs", "rr", "spn", "srt", "hrrn", "feedback", "all"])
                .case_insensitive(true)
                .default_value("all")
                .help("Algorithm to run, or all for the comparison set"),
        )
        .arg(
            Arg::with_name("quantum")
                .short("q")
                .long("quantum")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Time quantum for rr and feedback"),
        )
        .arg(
            Arg::with_name("queues")
                .short("k")
                .long("queues")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Number of feedback queues"),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .conflicts_with("process")
                .help("File with one \"arrival burst\" pair per line"),
        )
        .arg(
            Arg::with_name("process")
                .short("p")
                .long("process")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .allow_hyphen_values(true)
                .help("A process as arrival:burst, repeatable"),
        )
        .arg(
            Arg::with_name("tui")
                .long("tui")
                .help("Browse the reports in an interactive terminal view"),
        )
}

fn run_with_args(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let algorithm = selected_algorithm(matches)?;
    let processes = load_processes(matches)?;

    let reports = match algorithm {
        Some(algorithm) => vec![run(algorithm, &processes)?],
        None => compare_all(&processes)?,
    };

    if matches.is_present("tui") {
        show_reports(reports)?;
    } else {
        for report in &reports {
            println!("{}\n", report);
        }
    }
    Ok(())
}

/// The single algorithm asked for, or `None` for the comparison set. The
/// comparison set has fixed parameters, so `--quantum` and `--queues` are
/// refused with it.
fn selected_algorithm(matches: &ArgMatches) -> Result<Option<Algorithm>, Box<dyn Error>> {
    let algorithm = matches.value_of("algorithm").unwrap_or("all");
    if algorithm.eq_ignore_ascii_case("all") {
        if let Some(name) = ["quantum", "queues"]
            .iter()
            .find(|name| matches.is_present(name))
        {
            return Err(format!(
                "--{} only applies to a single algorithm, the comparison uses q={}",
                name,
                config::COMPARISON_QUANTUM
            )
            .into());
        }
        return Ok(None);
    }

    let quantum = integer_arg(matches, "quantum", i64::from(config::DEFAULT_QUANTUM))?;
    let queues = integer_arg(matches, "queues", config::DEFAULT_QUEUES as i64)?;
    Ok(Some(Algorithm::from_name(algorithm, quantum, queues)?))
}

fn load_processes(matches: &ArgMatches) -> Result<ProcessTable, SchedError> {
    if let Some(path) = matches.value_of("input") {
        return input::read_process_file(path);
    }

    let pairs = match matches.values_of("process") {
        Some(values) => values
            .enumerate()
            .map(|(index, value)| input::parse_process_arg(value, index + 1))
            .collect::<Result<Vec<_>, _>>()?,
        None => config::default_workload(),
    };
    ProcessTable::from_pairs(pairs)
}

fn integer_arg(matches: &ArgMatches, name: &str, default: i64) -> Result<i64, String> {
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .map_err(|_| format!("--{} expects a whole number, got \"{}\"", name, value)),
        None => Ok(default),
    }
}

fn show_reports(reports: Vec<Report>) -> Result<(), io::Error> {
    execute!(io::stdout(), Clear(ClearType::All))?;

    let mut viewer = ReportViewer::new(reports)?;
    while viewer.run()? {}
    drop(viewer);

    execute!(io::stdout(), Clear(ClearType::All))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(args: &[&str]) -> Result<Option<Algorithm>, String> {
        let argv = std::iter::once("uniprocessor-scheduler").chain(args.iter().copied());
        let matches = cli().get_matches_from_safe(argv).map_err(|err| err.message)?;
        selected_algorithm(&matches).map_err(|err| err.to_string())
    }

    #[test]
    fn test_comparison_refuses_parameters() {
        assert_eq!(selected(&[]), Ok(None));
        assert_eq!(selected(&["-a", "ALL"]), Ok(None));

        let err = selected(&["-q", "5"]).unwrap_err();
        assert!(err.starts_with("--quantum only applies to a single algorithm"), "{}", err);
        let err = selected(&["-a", "all", "-k", "4"]).unwrap_err();
        assert!(err.starts_with("--queues only applies"), "{}", err);
    }

    #[test]
    fn test_single_algorithm_takes_parameters() {
        assert_eq!(
            selected(&["-a", "rr", "-q", "5"]),
            Ok(Some(Algorithm::RoundRobin { quantum: 5 }))
        );
        assert_eq!(
            selected(&["-a", "feedback", "-k", "4"]),
            Ok(Some(Algorithm::Feedback {
                queues: 4,
                quantum: config::DEFAULT_QUANTUM
            }))
        );
        assert_eq!(selected(&["-a", "fcfs"]), Ok(Some(Algorithm::Fcfs)));
        assert!(selected(&["-a", "rr", "-q", "two"]).is_err());
    }
}
