//! morphroot - 영어 단어 어근 분해 CLI

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use morphroot::config::{load_config, save_config, MorphConfig};
use morphroot::{FileStorage, MorphEngine, Storage};

/// 명령줄 인자
#[derive(Parser, Debug)]
#[command(name = "morphroot", version, about = "English word-root decomposition")]
struct Cli {
    /// 분해 결과와 통계를 JSON으로 출력
    #[arg(long, global = true)]
    json: bool,

    // 생략하면 표준 입력의 단어를 한 줄씩 분해
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Decompose words (reads stdin line by line when no word is given)
    Decompose { words: Vec<String> },
    /// Show learning statistics
    Stats,
    /// Export learning data (stdout when no file is given)
    Export { file: Option<PathBuf> },
    /// Import learning data
    Import { file: PathBuf },
    /// Correct one component of a word's decomposition
    Correct {
        word: String,
        index: usize,
        text: String,
        gloss: String,
    },
    /// Clear learning data and restore the built-in tables
    Reset,
    /// Show or change the config file
    Config {
        #[arg(long)]
        fragment_threshold: Option<usize>,
        #[arg(long)]
        top_roots_limit: Option<usize>,
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn print_decomposition<S: Storage>(engine: &mut MorphEngine<S>, word: &str, json: bool) {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return;
    }
    let decomposition = engine.decompose(&word);
    if json {
        let line = serde_json::json!({ "word": word, "components": decomposition });
        println!("{}", line);
    } else {
        println!("{}: {}", word, decomposition);
    }
}

/// 지정한 값만 바꿔 저장. 아무것도 지정하지 않으면 현재 설정만 출력
fn configure(
    mut config: MorphConfig,
    fragment_threshold: Option<usize>,
    top_roots_limit: Option<usize>,
    data_dir: Option<PathBuf>,
) -> morphroot::Result<()> {
    let changed = fragment_threshold.is_some() || top_roots_limit.is_some() || data_dir.is_some();
    if let Some(threshold) = fragment_threshold {
        config.fragment_threshold = threshold;
    }
    if let Some(limit) = top_roots_limit {
        config.top_roots_limit = limit;
    }
    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }
    if changed {
        let path = save_config(&config)?;
        eprintln!("설정 저장: {}", path.display());
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn open_engine(config: &MorphConfig) -> MorphEngine<FileStorage> {
    MorphEngine::with_config(FileStorage::new(config.data_dir()), config)
}

fn run(cli: Cli) -> morphroot::Result<()> {
    let config = load_config();
    let command = cli.command.unwrap_or(Command::Decompose { words: Vec::new() });

    match command {
        Command::Decompose { words } => {
            let mut engine = open_engine(&config);
            if words.is_empty() {
                for line in io::stdin().lock().lines() {
                    print_decomposition(&mut engine, &line?, cli.json);
                }
            } else {
                for word in &words {
                    print_decomposition(&mut engine, word, cli.json);
                }
            }
        }
        Command::Stats => {
            let stats = open_engine(&config).learning_stats();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("전체 검색: {}", stats.total_searches);
                println!("검색 단어: {}", stats.unique_words);
                println!("교정 단어: {}", stats.correction_count);
                println!("자주 쓰인 형태소:");
                for (morpheme, count) in &stats.top_roots {
                    println!("  {:<10} {}", morpheme, count);
                }
            }
        }
        Command::Export { file } => {
            let snapshot = open_engine(&config).export_snapshot()?;
            match file {
                Some(path) => {
                    fs::write(&path, snapshot)?;
                    println!("내보내기 완료: {}", path.display());
                }
                None => println!("{}", snapshot),
            }
        }
        Command::Import { file } => {
            let blob = fs::read_to_string(&file)?;
            open_engine(&config).import_snapshot(&blob)?;
            println!("가져오기 성공");
        }
        Command::Correct {
            word,
            index,
            text,
            gloss,
        } => {
            if open_engine(&config).correct_root(&word, index, &text, &gloss) {
                println!("교정 저장: {} [{}] -> {} ({})", word, index, text, gloss);
            } else {
                println!("교정 무시됨: {} [{}]", word, index);
            }
        }
        Command::Reset => {
            open_engine(&config).reset();
            println!("학습 데이터를 초기화했습니다");
        }
        Command::Config {
            fragment_threshold,
            top_roots_limit,
            data_dir,
        } => configure(config, fragment_threshold, top_roots_limit, data_dir)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("명령 실패: {}", e);
            eprintln!("오류: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("morphroot").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_anywhere() {
        for args in [
            &["--json", "decompose", "report"][..],
            &["decompose", "report", "--json"][..],
        ] {
            let cli = parse(args).unwrap();
            assert!(cli.json);
            assert_eq!(
                cli.command,
                Some(Command::Decompose {
                    words: vec!["report".to_string()]
                })
            );
        }
    }

    #[test]
    fn test_no_subcommand_reads_stdin() {
        let cli = parse(&[]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(parse(&["stats", "junk"]).is_err());
        assert!(parse(&["export", "a", "b"]).is_err());
        assert!(parse(&["reset", "now"]).is_err());
        assert!(parse(&["import"]).is_err());
    }

    #[test]
    fn test_correct_arguments() {
        let cli = parse(&["correct", "foo", "0", "fo", "test-meaning"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Correct {
                word: "foo".to_string(),
                index: 0,
                text: "fo".to_string(),
                gloss: "test-meaning".to_string(),
            })
        );
        assert!(parse(&["correct", "foo", "x", "fo", "m"]).is_err());
        assert!(parse(&["correct", "foo", "0", "fo"]).is_err());
        assert!(parse(&["correct", "foo", "0", "fo", "m", "extra"]).is_err());
    }

    #[test]
    fn test_config_options() {
        let cli = parse(&["config", "--fragment-threshold", "6"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Config {
                fragment_threshold: Some(6),
                top_roots_limit: None,
                data_dir: None,
            })
        );
    }
}
