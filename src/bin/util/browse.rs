use colored::Colorize;
use log::debug;
use sitesearch::{RESULT_LIMIT, ResultsPager, SearchMode, SearchResults};
use std::io::{self, BufRead, Write};

/// Interactive pager over one query's results.
///
/// Renders the visible page on stdout and steps the cursor on `n`/`p`
/// commands read from stdin until `q` or end of input.
pub struct ResultsBrowser {
    pager: ResultsPager,
    mode: SearchMode,
}

impl ResultsBrowser {
    pub fn new(results: SearchResults, mode: SearchMode) -> Self {
        let mut pager = ResultsPager::new();
        pager.install(results);
        ResultsBrowser { pager, mode }
    }

    /// Runs the browse loop.
    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.pager.is_empty() {
            println!("No results");
            return Ok(());
        }
        println!("Results (Top {}):", RESULT_LIMIT);

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            self.render_page();

            let label = self.pager.page_label().unwrap_or_default();
            print!(
                "{}  [n]ext  [p]rev  [q]uit > ",
                format!("page {}", label).bold()
            );
            io::stdout().flush()?;

            let Some(line) = lines.next() else { break };
            match line?.trim() {
                "n" | "next" => self.pager.next(),
                "p" | "prev" => self.pager.previous(),
                "q" | "quit" => break,
                other => debug!("Ignoring unknown command '{}'", other),
            }
        }
        Ok(())
    }

    fn render_page(&self) {
        for (i, hit) in self.pager.visible_slice().iter().enumerate() {
            let rank = self.pager.offset() + i + 1;
            println!();
            println!("{} - {}", rank, hit.title.bold());
            println!("   Score: {:.4}", hit.score);
            if let Some(excerpt) = hit.highlights.resolve(self.mode) {
                println!("   Highlights: {}", excerpt.italic());
            }
            println!("   {}", hit.url.blue().underline());
            println!("   {}", snippet(&hit.body, 280));
        }
    }
}

/// Trims a body to a display snippet, cutting on a character boundary.
fn snippet(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        body.to_string()
    } else {
        let cut: String = body.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}
