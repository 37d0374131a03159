// Narrative report parsing
//
// Line-oriented state machine that re-parses explainer output into typed
// display blocks. Three pending buffers (paragraph, bullets, plan rows)
// are mutually exclusive; headings and blank lines flush everything.
//
// The plan-allocation row pattern is co-specified with the explainer
// output format; keep the two in sync.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").unwrap());
static PLAN_ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^([A-Za-z][A-Za-z ]*):\s*\$?([\d,]+)\s*Emergency\s*Fund\s*\|\s*\$?([\d,]+)\s*Debt\s*Payment\s*\|\s*\$?([\d,]+)\s*Investment$",
    )
    .unwrap()
});

/// One typed unit of narrative text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    PlanTable { rows: Vec<PlanRow> },
}

/// One parsed plan-allocation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    pub plan: String,
    pub emergency_fund: i64,
    pub debt_payment: i64,
    pub investment: i64,
}

/// Strip markdown emphasis characters and tidy spacing. Applied to
/// heading, paragraph, and bullet text; table cells stay untouched.
pub fn clean_body_text(text: &str) -> String {
    let value = text
        .replace("**", "")
        .replace("__", "")
        .replace('*', "")
        .replace('_', " ")
        .replace('`', "");
    let value = insert_word_breaks(&value);
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Insert a space between a digit and an immediately following letter, and
/// after a comma sitting between two letters. Done as a char scan since
/// the regex crate has no lookaround.
fn insert_word_breaks(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if let Some(&next) = chars.get(i + 1) {
            let break_after_digit = c.is_ascii_digit() && next.is_ascii_alphabetic();
            let break_after_comma = c == ','
                && next.is_ascii_alphabetic()
                && i > 0
                && chars[i - 1].is_ascii_alphabetic();
            if break_after_digit || break_after_comma {
                out.push(' ');
            }
        }
    }
    out
}

fn parse_plan_allocation_line(line: &str) -> Option<PlanRow> {
    let caps = PLAN_ROW_RE.captures(line)?;
    Some(PlanRow {
        plan: clean_body_text(&caps[1]),
        emergency_fund: parse_amount(&caps[2])?,
        debt_payment: parse_amount(&caps[3])?,
        investment: parse_amount(&caps[4])?,
    })
}

fn parse_amount(raw: &str) -> Option<i64> {
    raw.replace(',', "").parse().ok()
}

#[derive(Default)]
struct BlockAccumulator {
    blocks: Vec<ReportBlock>,
    paragraph: Vec<String>,
    bullets: Vec<String>,
    plan_rows: Vec<PlanRow>,
}

impl BlockAccumulator {
    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let text = clean_body_text(&self.paragraph.join(" "));
            self.blocks.push(ReportBlock::Paragraph { text });
            self.paragraph.clear();
        }
    }

    fn flush_bullets(&mut self) {
        if !self.bullets.is_empty() {
            let items = self.bullets.iter().map(|s| clean_body_text(s)).collect();
            self.blocks.push(ReportBlock::Bullets { items });
            self.bullets.clear();
        }
    }

    fn flush_plan_rows(&mut self) {
        if !self.plan_rows.is_empty() {
            self.blocks.push(ReportBlock::PlanTable {
                rows: std::mem::take(&mut self.plan_rows),
            });
        }
    }

    fn flush_all(&mut self) {
        self.flush_paragraph();
        self.flush_bullets();
        self.flush_plan_rows();
    }
}

/// Parse narrative text into an ordered sequence of display blocks.
pub fn parse_report_blocks(markdown_text: &str) -> Vec<ReportBlock> {
    let mut acc = BlockAccumulator::default();

    for raw in markdown_text.lines() {
        let stripped = raw.trim();

        if let Some(caps) = HEADING_RE.captures(stripped) {
            acc.flush_all();
            acc.blocks.push(ReportBlock::Heading {
                level: caps[1].len() as u8,
                text: clean_body_text(&caps[2]),
            });
            continue;
        }

        if stripped.is_empty() {
            acc.flush_all();
            continue;
        }

        if let Some(caps) = BULLET_RE.captures(stripped) {
            acc.flush_paragraph();
            acc.flush_plan_rows();
            acc.bullets.push(caps[1].to_string());
            continue;
        }

        if let Some(row) = parse_plan_allocation_line(stripped) {
            acc.flush_paragraph();
            acc.flush_bullets();
            acc.plan_rows.push(row);
            continue;
        }

        acc.flush_bullets();
        acc.flush_plan_rows();
        acc.paragraph.push(stripped.to_string());
    }

    acc.flush_all();
    acc.blocks
}
