//! Output regions and the renderer seam.

use std::io::{self, Write};

use crate::aggregate::AggregationResult;
use crate::news::Article;
use crate::quotes::StockSnapshot;

/// A named output region. Each bucket of an [`AggregationResult`] goes to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PrimaryStock,
    PositiveNews,
    NegativeNews,
    GlobalNews,
    LocalNews,
    CompetitorNews,
    CompetitorStocks,
}

impl Region {
    /// Stable identifier of the region (e.g. `positive-news`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::PrimaryStock => "primary-stock",
            Self::PositiveNews => "positive-news",
            Self::NegativeNews => "negative-news",
            Self::GlobalNews => "global-news",
            Self::LocalNews => "local-news",
            Self::CompetitorNews => "competitor-news",
            Self::CompetitorStocks => "competitor-stocks",
        }
    }

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::PrimaryStock => "Stock",
            Self::PositiveNews => "Positive news",
            Self::NegativeNews => "Negative news",
            Self::GlobalNews => "Global news",
            Self::LocalNews => "Local (US) news",
            Self::CompetitorNews => "Competitor news",
            Self::CompetitorStocks => "Competitor stocks",
        }
    }
}

/// Displays buckets and quotes. Implementations own the "no results" fallbacks.
pub trait Renderer {
    /// Renders a list of articles into `region`.
    ///
    /// # Errors
    /// Returns an error if the underlying output fails.
    fn render_news(&mut self, region: Region, articles: &[Article]) -> io::Result<()>;

    /// Renders the primary company's snapshot, or a failure placeholder for `None`.
    ///
    /// # Errors
    /// Returns an error if the underlying output fails.
    fn render_stock(&mut self, region: Region, quote: Option<&StockSnapshot>) -> io::Result<()>;

    /// Renders competitor snapshots; missing entries are skipped.
    ///
    /// # Errors
    /// Returns an error if the underlying output fails.
    fn render_competitor_stocks(
        &mut self,
        region: Region,
        quotes: &[Option<StockSnapshot>],
    ) -> io::Result<()>;
}

/// Hands every part of `result` to its region.
///
/// # Errors
/// Returns the first error reported by the renderer.
pub fn render_result<R: Renderer + ?Sized>(
    renderer: &mut R,
    result: &AggregationResult,
) -> io::Result<()> {
    renderer.render_stock(Region::PrimaryStock, result.primary_quote.as_ref())?;
    renderer.render_news(Region::PositiveNews, &result.positive)?;
    renderer.render_news(Region::NegativeNews, &result.negative)?;
    renderer.render_news(Region::GlobalNews, &result.global)?;
    renderer.render_news(Region::LocalNews, &result.local)?;
    renderer.render_news(Region::CompetitorNews, &result.competitors)?;
    renderer.render_competitor_stocks(Region::CompetitorStocks, &result.competitor_quotes)
}

/// Plain-text renderer writing one section per region.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn heading(&mut self, region: Region) -> io::Result<()> {
        writeln!(self.out, "== {} [{}] ==", region.heading(), region.id())
    }
}

/// Formats `v` with the quote's direction as its sign.
fn signed(v: f64, up: bool) -> String {
    let sign = if up { '+' } else { '-' };
    format!("{sign}{:.2}", v.abs())
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_news(&mut self, region: Region, articles: &[Article]) -> io::Result<()> {
        self.heading(region)?;
        if articles.is_empty() {
            writeln!(self.out, "No news found.")?;
        }
        for a in articles {
            writeln!(self.out, "* {}", a.title)?;
            writeln!(self.out, "  {}", a.link)?;
            if !a.description.is_empty() {
                writeln!(self.out, "  {}", a.description)?;
            }
        }
        writeln!(self.out)
    }

    fn render_stock(&mut self, region: Region, quote: Option<&StockSnapshot>) -> io::Result<()> {
        self.heading(region)?;
        match quote {
            Some(q) => writeln!(
                self.out,
                "{} ${:.2} {} ({}%)",
                q.symbol,
                q.price,
                signed(q.change, q.is_up()),
                signed(q.change_percent, q.is_up())
            )?,
            None => writeln!(self.out, "Failed to load stock data.")?,
        }
        writeln!(self.out)
    }

    fn render_competitor_stocks(
        &mut self,
        region: Region,
        quotes: &[Option<StockSnapshot>],
    ) -> io::Result<()> {
        self.heading(region)?;
        if quotes.is_empty() {
            writeln!(self.out, "Failed to load competitor stock data.")?;
        }
        for q in quotes.iter().flatten() {
            writeln!(
                self.out,
                "{} ${:.2} {}%",
                q.symbol,
                q.price,
                signed(q.change_percent, q.is_up())
            )?;
        }
        writeln!(self.out)
    }
}
