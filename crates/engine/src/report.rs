//! Printable plain-text report of a closing and its check against a draw.

use rust_decimal::Decimal;

use fechamento_shared::money::{format_brl, Money};
use fechamento_shared::words::amount_in_words;
use fechamento_shared::{DrawResult, PrizeTable, ScoreSummary, TicketBatch};

pub const DEFAULT_PAGE_LINES: usize = 60;
const WIDTH: usize = 72;
// footer takes a blank line plus the page counter
const FOOTER_LINES: usize = 2;
const MIN_PAGE_LINES: usize = FOOTER_LINES + 8;

const INFO_TEXT: &str = "A principal vantagem de um fechamento com 19 números é a redução do risco \
matemático. Uma aposta simples de 15 números acerta o prêmio máximo com probabilidade de 1 em \
3.268.760, enquanto um grupo de 19 dezenas cobre 3.876 combinações: a chance de as 15 dezenas \
sorteadas estarem todas dentro do grupo é de 1 em 843. Quando isso acontece, cada um dos 50 jogos \
deste fechamento faz pelo menos 11 acertos.";

/// The draw a batch was checked against.
pub struct CheckedDraw<'a> {
    pub result: &'a DrawResult,
    pub summary: &'a ScoreSummary,
    /// Contest number when the result is an official published draw.
    pub contest: Option<u32>,
}

pub struct ReportInput<'a> {
    pub batch: &'a TicketBatch,
    pub checked: Option<CheckedDraw<'a>>,
    /// Stake per ticket, for the cost line of an unchecked report.
    pub stake: Money,
    pub page_lines: usize,
}

impl<'a> ReportInput<'a> {
    pub fn new(batch: &'a TicketBatch) -> Self {
        Self {
            batch,
            checked: None,
            stake: PrizeTable::default().stake,
            page_lines: DEFAULT_PAGE_LINES,
        }
    }

    pub fn with_check(mut self, checked: CheckedDraw<'a>) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_stake(mut self, stake: Money) -> Self {
        self.stake = stake;
        self
    }

    pub fn with_page_lines(mut self, page_lines: usize) -> Self {
        self.page_lines = page_lines;
        self
    }
}

fn title(lines: &mut Vec<String>, text: &str) {
    lines.push(String::new());
    lines.push(text.to_string());
    lines.push("-".repeat(WIDTH));
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn ticket_cells(numbers: &[u8], result: Option<&DrawResult>) -> String {
    numbers
        .iter()
        .map(|&n| match result {
            Some(r) if r.contains(n) => format!("[{:02}]", n),
            _ => format!(" {:02} ", n),
        })
        .collect::<Vec<_>>()
        .join("")
}

fn body(input: &ReportInput<'_>) -> Vec<String> {
    let batch = input.batch;
    let checked = input.checked.as_ref();
    let mut lines = vec![
        "=".repeat(WIDTH),
        "LOTOFÁCIL - FECHAMENTO 19 -> 15 -> 50".to_string(),
        "Premiações múltiplas com 19 dezenas selecionadas".to_string(),
        "=".repeat(WIDTH),
    ];

    title(&mut lines, "1. NÚMEROS BASE (19 Escolhidos)");
    lines.push(batch.base().to_string());

    match checked.and_then(|c| c.contest) {
        Some(contest) => title(&mut lines, &format!("2. RESULTADO CONFERIDO (Concurso nº {contest})")),
        None => title(&mut lines, "2. RESULTADO CONFERIDO"),
    }
    match checked {
        Some(c) => lines.push(c.result.to_string()),
        None => lines.push("Nenhum resultado selecionado para conferência.".to_string()),
    }

    title(&mut lines, "3. RESUMO FINANCEIRO");
    match checked {
        Some(c) => {
            let s = c.summary;
            lines.push(format!("* Custo Total ({} Jogos): {}", batch.len(), format_brl(s.cost)));
            lines.push(format!("* Prêmio Bruto: {}", format_brl(s.gross)));
            lines.push(format!("* Lucro Líquido: {}", format_brl(s.net)));
            if s.net > Decimal::ZERO {
                lines.extend(wrap(&format!("({})", amount_in_words(s.net)), WIDTH));
            }
        }
        None => {
            let cost = input.stake * Decimal::from(batch.len() as u64);
            lines.push(format!("* Custo Total ({} Jogos): {}", batch.len(), format_brl(cost)));
            lines.push("(Premiações e lucro não calculados - fechamento não conferido)".to_string());
        }
    }

    title(&mut lines, "4. RESUMO DE ACERTOS");
    match checked {
        Some(c) => {
            let items: Vec<String> = c
                .summary
                .histogram
                .iter()
                .filter(|&(_, count)| count > 0)
                .map(|(hits, count)| format!("{hits} Acertos (x {count})"))
                .collect();
            if items.is_empty() {
                lines.push("Nenhuma premiação identificada.".to_string());
            } else {
                lines.push(items.join(" | "));
            }
        }
        None => lines.push(
            "Atenção: este fechamento ainda não foi conferido com um resultado.".to_string(),
        ),
    }

    title(&mut lines, "5. JOGOS GERADOS");
    lines.push(format!("{:>3} | {:<60} | STATUS", "#", "DEZENAS DO JOGO"));
    for (i, ticket) in batch.iter().enumerate() {
        let result = checked.map(|c| c.result);
        let hits = checked.and_then(|c| c.summary.hits.get(i).copied()).unwrap_or(0);
        let status = if hits >= 11 { format!("{hits} ACERTOS") } else { "-".to_string() };
        lines.push(format!(
            "{:>3} | {:<60} | {}",
            format!("{:02}", i + 1),
            ticket_cells(ticket.numbers(), result),
            status
        ));
    }

    title(&mut lines, "6. INFORMAÇÕES ADICIONAIS");
    lines.extend(wrap(INFO_TEXT, WIDTH));
    lines
}

/// Renders the report, split into pages of `page_lines` lines each ending
/// with a "Página i de n" footer. Pages are separated by a form feed.
pub fn render(input: &ReportInput<'_>) -> String {
    let lines = body(input);
    let per_page = input.page_lines.max(MIN_PAGE_LINES) - FOOTER_LINES;
    let pages: Vec<&[String]> = lines.chunks(per_page).collect();
    let total = pages.len();

    let mut out = String::new();
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            out.push('\u{c}');
        }
        for line in page.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!("Página {} de {}\n", i + 1, total));
    }
    out
}
