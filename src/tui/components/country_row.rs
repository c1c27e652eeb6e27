use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::facts::CountryFacts;
use crate::countries::CountryRecord;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Name, capital, flag image and facts prompt.
const SUMMARY_LINES: u16 = 4;
/// Row-relative line of the "Show facts" prompt (line 0 is the top border).
pub const FACTS_PROMPT_LINE: u16 = SUMMARY_LINES;

pub const SHOW_FACTS: &str = "▸ Show facts";
pub const HIDE_FACTS: &str = "▾ Hide facts";

/// A transient widget rendering one country: summary always, facts panel
/// when `facts` is given.
///
/// Expansion state is owned by the parent `CountryListState`; the row is
/// rebuilt every frame from the record and that flag.
#[derive(Clone, Copy)]
pub struct CountryRow<'a> {
    pub record: &'a CountryRecord,
    /// Present when the row is expanded
    pub facts: Option<&'a CountryFacts>,
    pub is_selected: bool,
}

impl<'a> CountryRow<'a> {
    pub fn new(record: &'a CountryRecord, facts: Option<&'a CountryFacts>, is_selected: bool) -> Self {
        Self {
            record,
            facts,
            is_selected,
        }
    }

    /// Height of the row at `width`, including borders.
    ///
    /// Summary lines never wrap; facts lines wrap the same way `Paragraph`
    /// does so the list can lay rows out without rendering them.
    pub fn calculate_height(facts: Option<&CountryFacts>, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let detail_lines: u16 = facts
            .map(|facts| {
                // Greedy, whitespace-only breaks: the same lines Paragraph draws
                let options = textwrap::Options::new(content_width as usize)
                    .break_words(true)
                    .word_separator(textwrap::WordSeparator::AsciiSpace)
                    .word_splitter(textwrap::WordSplitter::NoHyphenation)
                    .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
                facts
                    .rows()
                    .iter()
                    .map(|(label, value)| {
                        let text = format!("{label}: {value}");
                        (textwrap::wrap(&text, &options).len() as u16).max(1)
                    })
                    .sum()
            })
            .unwrap_or(0);

        SUMMARY_LINES + detail_lines + VERTICAL_OVERHEAD
    }

    fn summary_lines(&self) -> Vec<Line<'a>> {
        let dim = Style::default().fg(Color::DarkGray);
        let prompt = if self.facts.is_some() { HIDE_FACTS } else { SHOW_FACTS };

        vec![
            Line::from(vec![
                Span::styled(
                    self.record.name.common.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(self.record.flag.as_str()),
            ]),
            Line::from(format!("Capital: {}", self.record.capital_display())),
            Line::from(Span::styled(format!("Flag: {}", self.record.flags.png), dim)),
            Line::from(Span::styled(prompt, Style::default().fg(Color::Cyan))),
        ]
    }
}

fn facts_lines(facts: &CountryFacts) -> Vec<Line<'_>> {
    facts
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": "),
                Span::raw(value),
            ])
        })
        .collect()
}

impl<'a> Widget for CountryRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(self.record.cca3.as_str())
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);

        let summary_area = Rect {
            height: inner.height.min(SUMMARY_LINES),
            ..inner
        };
        Paragraph::new(self.summary_lines()).render(summary_area, buf);

        if let Some(facts) = self.facts {
            let facts_area = Rect {
                y: inner.y + summary_area.height,
                height: inner.height.saturating_sub(summary_area.height),
                ..inner
            };
            Paragraph::new(facts_lines(facts))
                .wrap(Wrap { trim: true })
                .render(facts_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::facts::FactsLocale;
    use crate::test_support::germany;

    fn render_row(row: CountryRow, width: u16) -> String {
        let height = CountryRow::calculate_height(row.facts, width);
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        row.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn collapsed_height_is_summary_plus_borders() {
        assert_eq!(CountryRow::calculate_height(None, 80), SUMMARY_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn expanded_height_adds_one_line_per_fact_when_wide() {
        let facts = CountryFacts::from_record(&germany(), &FactsLocale::default());
        assert_eq!(
            CountryRow::calculate_height(Some(&facts), 200),
            SUMMARY_LINES + 8 + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn expanded_height_grows_when_facts_wrap() {
        let facts = CountryFacts::from_record(&germany(), &FactsLocale::default());
        let wide = CountryRow::calculate_height(Some(&facts), 200);
        let narrow = CountryRow::calculate_height(Some(&facts), 30);
        assert!(narrow > wide);
    }

    #[test]
    fn hyphenated_names_never_push_out_the_last_fact() {
        let record = CountryRecord {
            name: crate::countries::CountryName {
                common: "Guinea-Bissau".to_string(),
                official: "Republic of Guinea-Bissau".to_string(),
                native_name: Default::default(),
            },
            alt_spellings: vec![
                "GW".to_string(),
                "Republic of Guinea-Bissau".to_string(),
                "República da Guiné-Bissau".to_string(),
            ],
            continents: vec!["Africa".to_string()],
            timezones: Some(vec!["UTC".to_string()]),
            cca3: "GNB".to_string(),
            ..Default::default()
        };
        let facts = CountryFacts::from_record(&record, &FactsLocale::default());

        for width in 18..=60 {
            let text = render_row(CountryRow::new(&record, Some(&facts), false), width);
            assert!(
                text.contains("Timezones: UTC"),
                "timezones cut off at width {width}"
            );
        }
    }

    #[test]
    fn zero_width_returns_minimum() {
        assert_eq!(CountryRow::calculate_height(None, 0), 1);
        assert_eq!(CountryRow::calculate_height(None, HORIZONTAL_OVERHEAD), 1);
    }

    #[test]
    fn collapsed_row_shows_summary_and_prompt() {
        let record = germany();
        let text = render_row(CountryRow::new(&record, None, false), 80);

        assert!(text.contains("Germany"));
        assert!(text.contains("Capital: Berlin"));
        assert!(text.contains("https://flagcdn.com/w320/de.png"));
        assert!(text.contains("Show facts"));
        assert!(!text.contains("Population"));
    }

    #[test]
    fn expanded_row_shows_facts_panel() {
        let record = germany();
        let facts = CountryFacts::from_record(&record, &FactsLocale::default());
        let text = render_row(CountryRow::new(&record, Some(&facts), true), 120);

        assert!(text.contains("Hide facts"));
        assert!(text.contains("Population: 83, 240, 525"));
        assert!(text.contains("Land size: 357, 114km²"));
        assert!(text.contains("Borders: AUT, BEL, CZE"));
        assert!(text.contains("Timezones: UTC+01:00"));
    }
}
