//! Upstream draw payloads, normalized into one canonical record, and the
//! ordered fallback chain that reads them.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use fechamento_shared::money::parse_brl;
use fechamento_shared::{DrawResult, PrizeTable, SelectionError};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload holds no draw")]
    Empty,
    #[error("invalid drawn number {0}")]
    InvalidNumber(String),
    #[error("invalid draw: {0}")]
    InvalidDraw(#[from] SelectionError),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no draw sources configured")]
    NoSources,
    #[error("all {0} draw sources failed")]
    AllSourcesFailed(usize),
}

/// A published draw in canonical form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestResult {
    pub contest: u32,
    pub date: Option<String>,
    pub result: DrawResult,
    /// Prize per hit count as published; tiers the source omitted are absent.
    pub prizes: BTreeMap<u8, Decimal>,
}

impl ContestResult {
    /// Copies non-zero published prizes over `table`; the stake is kept.
    pub fn apply_prizes(&self, table: &PrizeTable) -> PrizeTable {
        let mut updated = table.clone();
        for (&hits, &value) in &self.prizes {
            if !value.is_zero() {
                updated.set_prize(hits, value);
            }
        }
        updated
    }

    /// True when `result` is this contest's draw.
    pub fn matches(&self, result: &DrawResult) -> bool {
        self.result == *result
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Community mirror: `concurso`, `dezenas`, `premiacoes[]`.
    LottoLookup,
    /// Official feed: `numero`, `listaDezenas`, `listaRateioPremio[]`.
    Caixa,
}

impl Schema {
    pub fn normalize(&self, payload: &str) -> Result<ContestResult, SourceError> {
        let value: Value = serde_json::from_str(payload)?;
        match self {
            Schema::LottoLookup => normalize_lotto_lookup(value),
            Schema::Caixa => normalize_caixa(value),
        }
    }
}

#[derive(Deserialize)]
struct LottoLookupDraw {
    concurso: u32,
    dezenas: Vec<Value>,
    #[serde(default)]
    premiacoes: Vec<LottoLookupPrize>,
    data_concurso: Option<String>,
    data: Option<String>,
}

#[derive(Deserialize)]
struct LottoLookupPrize {
    descricao: Option<String>,
    faixa: Option<u32>,
    valor_premio: Option<Value>,
    premio: Option<Value>,
}

impl LottoLookupPrize {
    fn hits(&self) -> Option<u8> {
        if let Some(desc) = &self.descricao {
            for hits in [15u8, 14, 13, 12, 11] {
                if desc.contains(&hits.to_string()) {
                    return Some(hits);
                }
            }
        }
        (self.faixa == Some(1)).then_some(15)
    }

    fn amount(&self) -> Decimal {
        [&self.valor_premio, &self.premio]
            .into_iter()
            .flatten()
            .map(amount_from_value)
            .find(|v| !v.is_zero())
            .unwrap_or(Decimal::ZERO)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaixaDraw {
    numero: u32,
    lista_dezenas: Vec<Value>,
    #[serde(default)]
    lista_rateio_premio: Vec<CaixaPrize>,
    data_apuracao: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaixaPrize {
    faixa: u32,
    valor_premio: Option<Value>,
}

fn normalize_lotto_lookup(value: Value) -> Result<ContestResult, SourceError> {
    let value = match value {
        Value::Array(items) => items.into_iter().next().ok_or(SourceError::Empty)?,
        other => other,
    };
    let draw: LottoLookupDraw = serde_json::from_value(value)?;

    let mut prizes = BTreeMap::new();
    for prize in &draw.premiacoes {
        if let Some(hits) = prize.hits() {
            prizes.insert(hits, prize.amount());
        }
    }

    Ok(ContestResult {
        contest: draw.concurso,
        date: draw.data_concurso.or(draw.data),
        result: draw_from_values(&draw.dezenas)?,
        prizes,
    })
}

fn normalize_caixa(value: Value) -> Result<ContestResult, SourceError> {
    let draw: CaixaDraw = serde_json::from_value(value)?;

    let mut prizes = BTreeMap::new();
    for prize in &draw.lista_rateio_premio {
        // tier 1 pays 15 hits, tier 5 pays 11
        if (1..=5).contains(&prize.faixa) {
            let hits = 16 - prize.faixa as u8;
            let amount = prize.valor_premio.as_ref().map(amount_from_value).unwrap_or(Decimal::ZERO);
            prizes.insert(hits, amount);
        }
    }

    Ok(ContestResult {
        contest: draw.numero,
        date: draw.data_apuracao,
        result: draw_from_values(&draw.lista_dezenas)?,
        prizes,
    })
}

fn draw_from_values(values: &[Value]) -> Result<DrawResult, SourceError> {
    let numbers = values
        .iter()
        .map(|v| {
            let parsed = match v {
                Value::String(s) => s.trim().parse::<u8>().ok(),
                Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
                _ => None,
            };
            parsed.ok_or_else(|| SourceError::InvalidNumber(v.to_string()))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    Ok(DrawResult::new(&numbers)?)
}

/// Prize amounts arrive as JSON numbers or text; unreadable ones count as zero.
fn amount_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .unwrap_or(Decimal::ZERO)
        }
        Value::String(s) => parse_brl(s).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

pub trait DrawSource {
    fn name(&self) -> &str;
    fn fetch(&self) -> Result<ContestResult, SourceError>;
}

/// Reads a saved upstream payload from a file, or from stdin when the path
/// is `-`.
pub struct JsonFileSource {
    path: PathBuf,
    schema: Schema,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>, schema: Schema) -> Self {
        let path = path.into();
        let name = format!("{:?}:{}", schema, path.display());
        Self { path, schema, name }
    }

    fn read(&self, mut stdin: impl Read) -> Result<String, SourceError> {
        let io_err = |source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if self.path.as_os_str() == "-" {
            let mut body = String::new();
            stdin.read_to_string(&mut body).map_err(io_err)?;
            Ok(body)
        } else {
            std::fs::read_to_string(&self.path).map_err(io_err)
        }
    }
}

impl DrawSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<ContestResult, SourceError> {
        self.schema.normalize(&self.read(std::io::stdin())?)
    }
}

pub const LOTTO_LOOKUP_URL: &str = "https://lottolookup.com.br/public/api/lotofacil";
pub const CAIXA_URL: &str = "https://servicebus2.caixa.gov.br/portaldeloterias/api/lotofacil";
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the latest contest from a JSON endpoint. Non-2xx answers are
/// failures.
pub struct HttpSource {
    url: String,
    schema: Schema,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, schema: Schema) -> Self {
        Self::with_timeout(url, schema, HTTP_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, schema: Schema, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            url: url.into(),
            schema,
            agent,
        }
    }
}

impl DrawSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<ContestResult, SourceError> {
        log::debug!("GET {}", self.url);
        let response = self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| SourceError::Http {
                url: self.url.clone(),
                source: Box::new(e),
            })?;
        let body = response.into_string().map_err(|source| SourceError::Io {
            path: self.url.clone(),
            source,
        })?;
        self.schema.normalize(&body)
    }
}

/// The community mirror first, then the official feed.
pub fn default_sources() -> Vec<Box<dyn DrawSource>> {
    vec![
        Box::new(HttpSource::new(LOTTO_LOOKUP_URL, Schema::LottoLookup)),
        Box::new(HttpSource::new(CAIXA_URL, Schema::Caixa)),
    ]
}

/// Tries each source in order and returns the first draw that normalizes.
pub fn fetch_latest(sources: &[Box<dyn DrawSource>]) -> Result<ContestResult, FetchError> {
    if sources.is_empty() {
        return Err(FetchError::NoSources);
    }
    for source in sources {
        match source.fetch() {
            Ok(contest) => {
                log::info!("contest {} loaded from {}", contest.contest, source.name());
                return Ok(contest);
            }
            Err(e) => log::warn!("draw source {} failed: {}", source.name(), e),
        }
    }
    Err(FetchError::AllSourcesFailed(sources.len()))
}
