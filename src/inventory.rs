use crate::{
    book::Book,
    error::FatalError,
    records,
    search::{self, Probe, SearchResult},
};
use clap::ValueEnum;
use log::{debug, info};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::Path,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<isbn> <quantity>` per line, loadable again as input
    #[default]
    Text,
    /// `isbn,quantity` rows with a header
    Csv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSummary {
    pub restocked: usize,
    pub added: usize,
    pub skipped: usize,
    pub iterations: usize,
}

/// The shelf: books kept in ascending ISBN order between phases.
#[derive(Debug, Default)]
pub struct Inventory {
    pub books: Vec<Book>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory { books: Vec::new() }
    }

    pub fn search(&self, isbn: &str) -> Probe {
        search::search(&self.books, isbn)
    }

    // stable, so equal ISBNs keep their arrival order
    fn sort(&mut self) {
        self.books.sort();
    }

    pub fn load_from(&mut self, path: &Path) -> Result<LoadSummary, FatalError> {
        let reader = records::open(path)?;
        self.load(reader, path)
    }

    /// Appends every valid record from the stream, then sorts. Load never merges.
    pub fn load<R: Read>(&mut self, reader: R, path: &Path) -> Result<LoadSummary, FatalError> {
        let batch = records::read_valid(reader, path)?;
        let summary = LoadSummary {
            loaded: batch.books.len(),
            skipped: batch.skipped,
        };
        self.books.extend(batch.books);
        self.sort();
        info!("Loaded {} books from {}", summary.loaded, path.display());
        Ok(summary)
    }

    pub fn update_from(&mut self, path: &Path) -> Result<UpdateSummary, FatalError> {
        let reader = records::open(path)?;
        self.update(reader, path)
    }

    /// Applies a delivery stream. Known titles are restocked in place and unknown
    /// ones are appended; the shelf is sorted once at the end of the batch.
    ///
    /// Searches run against the partly unsorted shelf, so two deliveries of the
    /// same new ISBN in one batch can both miss and leave two entries behind.
    pub fn update<R: Read>(&mut self, reader: R, path: &Path) -> Result<UpdateSummary, FatalError> {
        let batch = records::read_valid(reader, path)?;
        let mut summary = UpdateSummary {
            skipped: batch.skipped,
            ..UpdateSummary::default()
        };

        for delivery in batch.books {
            let probe = self.search(&delivery.isbn);
            summary.iterations += probe.iterations;
            match probe.result {
                SearchResult::Found(index) => {
                    self.books[index].add_to_shelf(delivery.quantity_on_shelf);
                    debug!("Restocked {} units of {}", delivery.quantity_on_shelf, delivery.isbn);
                    summary.restocked += 1;
                }
                SearchResult::NotFound(_) => {
                    debug!("Added new title {}", delivery.isbn);
                    self.books.push(delivery);
                    summary.added += 1;
                }
            }
        }

        self.sort();
        info!(
            "Applied deliveries from {}: {} restocked, {} added",
            path.display(),
            summary.restocked,
            summary.added
        );
        Ok(summary)
    }

    pub fn save_as(&self, path: &Path, format: OutputFormat) -> Result<(), FatalError> {
        let write_protected = || FatalError::WriteProtected(path.to_path_buf());
        let file = File::create(path).map_err(|_| write_protected())?;
        self.write_to(BufWriter::new(file), format)
            .map_err(|_| write_protected())?;
        info!("Wrote {} books to {}", self.books.len(), path.display());
        Ok(())
    }

    pub fn write_to<W: Write>(&self, mut writer: W, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Text => {
                for book in &self.books {
                    writeln!(writer, "{}", book)?;
                }
                writer.flush()
            }
            OutputFormat::Csv => {
                let mut csv_writer = csv::Writer::from_writer(writer);
                for book in &self.books {
                    csv_writer.serialize(book).map_err(io::Error::other)?;
                }
                csv_writer.flush()
            }
        }
    }
}

#[cfg(test)]
impl Inventory {
    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.search(isbn)
            .result
            .found()
            .map(|index| &self.books[index])
    }
}
