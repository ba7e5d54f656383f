//! Plain-text report rendering

use std::collections::BTreeSet;
use std::io::{self, Write};

use super::duration::format_duration;
use super::sort::SortOrder;
use crate::module::feed::Site;
use crate::module::site::EnrichedSite;

const SEPARATOR_WIDTH: usize = 80;

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Distinct appointment types across all of a site's appointments, sorted.
pub fn appointment_types<'a>(site: &EnrichedSite<'a>) -> BTreeSet<&'a str> {
    let s: &'a Site = site.site;
    s.appointments
        .iter()
        .flat_map(|a| a.appointment_types.iter().map(String::as_str))
        .collect()
}

/// Builder for the block of lines describing one site.
struct SiteBlock {
    lines: Vec<String>,
}

impl SiteBlock {
    fn new(index: usize) -> Self {
        Self {
            lines: vec![format!("{}.", index)],
        }
    }

    fn field(mut self, label: &str, value: impl std::fmt::Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    fn finish(mut self) -> String {
        self.lines.push(separator());
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Render one site as a numbered block, separator line included.
pub fn render_site(site: &EnrichedSite<'_>, index: usize) -> String {
    let s = site.site;
    let types: Vec<&str> = appointment_types(site).into_iter().collect();

    SiteBlock::new(index)
        .field("Distance", site.distance_miles)
        .field("URL", &s.url)
        .field("Place", format!("{} - {}", s.name, s.address))
        .field("Zip code", &s.postal_code)
        .field("Number of appointments", site.appointment_count())
        .field("Vaccine types", s.vaccine_types.join(","))
        .field("Appointment types", types.join(","))
        .field("Last modified ago", format_duration(site.last_modified_ago))
        .field("Last fetched ago", format_duration(site.last_fetched_ago))
        .finish()
}

/// Writes the report to any sink.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_summary(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "{} sites found", count)
    }

    /// Sort `sites` in place by `order` and write the section.
    ///
    /// Sorting is stable, so ties keep the order left by the previous section.
    pub fn write_section(
        &mut self,
        order: SortOrder,
        sites: &mut [EnrichedSite<'_>],
    ) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", separator())?;
        writeln!(self.out, "Sorting by: {}", order)?;

        order.sort(sites);
        for (idx, site) in sites.iter().enumerate() {
            self.out.write_all(render_site(site, idx + 1).as_bytes())?;
        }
        Ok(())
    }

    /// Summary line, then one section per sort order, in the given order.
    pub fn write_report(
        &mut self,
        sites: &mut [EnrichedSite<'_>],
        orders: &[SortOrder],
    ) -> io::Result<()> {
        self.write_summary(sites.len())?;
        for order in orders {
            self.write_section(*order, sites)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
