pub mod fetch;
pub mod generate;
pub mod report;
pub mod score;
pub mod simulate;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use fechamento_engine::source::{
    default_sources, fetch_latest, ContestResult, DrawSource, JsonFileSource, Schema,
};
use fechamento_shared::money::parse_brl;
use fechamento_shared::{BaseSelection, PrizeTable};

/// Splits number lists given as separate arguments or as one string
/// separated by spaces, commas, semicolons or dashes.
pub fn parse_numbers(values: &[String]) -> anyhow::Result<Vec<u8>> {
    values
        .iter()
        .flat_map(|v| v.split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '-')))
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>().with_context(|| format!("invalid number {:?}", s)))
        .collect()
}

#[derive(Args)]
pub struct BaseArgs {
    /// The 19 base numbers
    #[arg(long, num_args = 1.., required = true)]
    pub base: Vec<String>,
}

impl BaseArgs {
    pub fn selection(&self) -> anyhow::Result<BaseSelection> {
        let numbers = parse_numbers(&self.base)?;
        BaseSelection::new(&numbers).context("invalid base selection")
    }
}

#[derive(Args)]
pub struct SourceArgs {
    /// Saved LottoLookup payload, tried first ("-" reads stdin)
    #[arg(long)]
    pub primary: Option<PathBuf>,
    /// Saved Caixa payload, tried when the primary fails
    #[arg(long)]
    pub fallback: Option<PathBuf>,
    /// Never query the online result services
    #[arg(long)]
    pub offline: bool,
}

impl SourceArgs {
    /// Saved payloads when given, otherwise the online services unless
    /// `--offline`.
    pub fn sources(&self) -> Vec<Box<dyn DrawSource>> {
        let mut sources: Vec<Box<dyn DrawSource>> = Vec::new();
        if let Some(path) = &self.primary {
            sources.push(Box::new(JsonFileSource::new(path, Schema::LottoLookup)));
        }
        if let Some(path) = &self.fallback {
            sources.push(Box::new(JsonFileSource::new(path, Schema::Caixa)));
        }
        if sources.is_empty() && !self.offline {
            sources = default_sources();
        }
        sources
    }

    pub fn is_empty(&self) -> bool {
        self.offline && self.primary.is_none() && self.fallback.is_none()
    }
}

#[derive(Args)]
pub struct DrawArgs {
    /// The 15 drawn numbers, entered by hand
    #[arg(long, num_args = 1..)]
    pub result: Vec<String>,
    #[command(flatten)]
    pub sources: SourceArgs,
}

pub struct ResolvedDraw {
    pub numbers: Vec<u8>,
    pub contest: Option<ContestResult>,
}

impl DrawArgs {
    /// Hand-entered numbers win over the fetched contest, and a failed fetch
    /// only matters when there are none. `None` when no result was entered
    /// and there is nothing to fetch from.
    pub fn resolve(&self) -> anyhow::Result<Option<ResolvedDraw>> {
        let numbers = if self.result.is_empty() {
            None
        } else {
            Some(parse_numbers(&self.result).context("invalid --result")?)
        };

        let sources = self.sources.sources();
        if sources.is_empty() {
            return Ok(numbers.map(|numbers| ResolvedDraw {
                numbers,
                contest: None,
            }));
        }

        let (contest, numbers) = match (fetch_latest(&sources), numbers) {
            (Ok(contest), numbers) => (contest, numbers),
            (Err(e), Some(numbers)) => {
                log::warn!("{}; using the entered result", e);
                return Ok(Some(ResolvedDraw {
                    numbers,
                    contest: None,
                }));
            }
            (Err(e), None) => return Err(e).context("failed to load the latest result"),
        };
        let numbers = numbers.unwrap_or_else(|| contest.result.numbers().to_vec());
        Ok(Some(ResolvedDraw {
            numbers,
            contest: Some(contest),
        }))
    }
}

#[derive(Args)]
pub struct PrizeArgs {
    /// JSON prize table, e.g. {"stake": "3.50", "11": "7.00", "15": "1500000.00"}
    #[arg(long)]
    pub prizes: Option<PathBuf>,
    /// Stake per ticket ("3,50" or "R$ 3,50")
    #[arg(long)]
    pub stake: Option<String>,
    /// Prize for 11 hits
    #[arg(long = "prize-11")]
    pub prize_11: Option<String>,
    /// Prize for 12 hits
    #[arg(long = "prize-12")]
    pub prize_12: Option<String>,
    /// Prize for 13 hits
    #[arg(long = "prize-13")]
    pub prize_13: Option<String>,
    /// Prize for 14 hits
    #[arg(long = "prize-14")]
    pub prize_14: Option<String>,
    /// Prize for 15 hits
    #[arg(long = "prize-15")]
    pub prize_15: Option<String>,
}

impl PrizeArgs {
    /// Defaults, then the JSON file, then prizes published with the contest,
    /// then explicit flags.
    pub fn table(&self, contest: Option<&ContestResult>) -> anyhow::Result<PrizeTable> {
        let mut table = match &self.prizes {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                PrizeTable::from_json(&json)
                    .with_context(|| format!("invalid prize table in {}", path.display()))?
            }
            None => PrizeTable::default(),
        };

        if let Some(contest) = contest {
            table = contest.apply_prizes(&table);
        }

        if let Some(stake) = &self.stake {
            table.stake = parse_brl(stake).context("invalid --stake")?;
        }
        let overrides = [
            (11, &self.prize_11),
            (12, &self.prize_12),
            (13, &self.prize_13),
            (14, &self.prize_14),
            (15, &self.prize_15),
        ];
        for (hits, value) in overrides {
            if let Some(value) = value {
                let amount = parse_brl(value).with_context(|| format!("invalid --prize-{}", hits))?;
                table.set_prize(hits, amount);
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Write;

    use rust_decimal::Decimal;
    use tempfile::NamedTempFile;

    use fechamento_shared::DrawResult;

    use super::*;

    const CAIXA: &str = r#"{
        "numero": 3589,
        "listaDezenas": ["03","04","05","06","07","09","10","12","14","16","18","20","21","23","24"],
        "listaRateioPremio": [{"faixa": 1, "valorPremio": 1500000.25}]
    }"#;

    fn saved(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    fn draw_args(result: &str, fallback: Option<PathBuf>) -> DrawArgs {
        DrawArgs {
            result: if result.is_empty() { vec![] } else { vec![result.to_string()] },
            sources: SourceArgs {
                primary: None,
                fallback,
                offline: true,
            },
        }
    }

    fn no_flags(prizes: Option<PathBuf>) -> PrizeArgs {
        PrizeArgs {
            prizes,
            stake: None,
            prize_11: None,
            prize_12: None,
            prize_13: None,
            prize_14: None,
            prize_15: None,
        }
    }

    #[test]
    fn test_parse_numbers_accepts_lists() {
        let args = vec!["01 02,03".to_string(), "4;5-6".to_string(), "7".to_string()];
        assert_eq!(parse_numbers(&args).unwrap(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(parse_numbers(&["1 x".to_string()]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = PrizeArgs {
            prizes: None,
            stake: Some("R$ 3,00".to_string()),
            prize_11: None,
            prize_12: None,
            prize_13: None,
            prize_14: Some("2.000,50".to_string()),
            prize_15: None,
        };
        let table = args.table(None).unwrap();
        assert_eq!(table.stake.to_string(), "3.00");
        assert_eq!(table.hits_14.to_string(), "2000.50");
        assert_eq!(table.hits_11, PrizeTable::default().hits_11);
    }

    #[test]
    fn test_entered_result_wins_over_contest() {
        let file = saved(CAIXA);
        let draw = draw_args("1-2-3-4-5-6-7-8-9-10-11-12-13-14-15", Some(file.path().to_path_buf()))
            .resolve()
            .unwrap()
            .unwrap();
        assert_eq!(draw.numbers, (1..=15).collect::<Vec<u8>>());
        assert_eq!(draw.contest.map(|c| c.contest), Some(3589));

        let draw = draw_args("", Some(file.path().to_path_buf())).resolve().unwrap().unwrap();
        assert_eq!(draw.numbers[0], 3);
    }

    #[test]
    fn test_failed_fetch_only_matters_without_result() {
        let missing = PathBuf::from("/nonexistent/caixa.json");
        let draw = draw_args("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15", Some(missing.clone()))
            .resolve()
            .unwrap()
            .unwrap();
        assert!(draw.contest.is_none());
        assert!(draw_args("", Some(missing)).resolve().is_err());
    }

    #[test]
    fn test_mistyped_result_is_an_error() {
        assert!(draw_args("1 2 3 4 5 6 7 8 9 10 11 12 13 14 x", None).resolve().is_err());
        assert!(draw_args("", None).resolve().unwrap().is_none());
    }

    #[test]
    fn test_offline_without_files_has_no_sources() {
        let args = draw_args("", None);
        assert!(args.sources.is_empty());
        assert!(args.sources.sources().is_empty());
        let online = SourceArgs { primary: None, fallback: None, offline: false };
        assert_eq!(online.sources().len(), 2);
    }

    #[test]
    fn test_prize_layering() {
        let file = saved(r#"{"11": "8.00", "12": "20.00"}"#);
        let contest = ContestResult {
            contest: 1,
            date: None,
            result: DrawResult::new(&(1..=15).collect::<Vec<u8>>()).unwrap(),
            prizes: BTreeMap::from([(12, Decimal::new(15, 0)), (15, Decimal::new(1_000, 0))]),
        };
        let mut args = no_flags(Some(file.path().to_path_buf()));
        args.prize_15 = Some("2.000,00".to_string());

        let table = args.table(Some(&contest)).unwrap();
        assert_eq!(table.hits_11, Decimal::new(800, 2));
        assert_eq!(table.hits_12, Decimal::new(15, 0));
        assert_eq!(table.hits_13, PrizeTable::default().hits_13);
        assert_eq!(table.hits_15, Decimal::new(200_000, 2));
        assert_eq!(table.stake, PrizeTable::default().stake);
    }
}
