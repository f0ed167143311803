use crate::{book::Book, error::FatalError};
use log::debug;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// One `<isbn> <quantity>` pair as read from a stock file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub isbn: String,
    pub quantity: i32,
}

/// Records split into those that pass validation and a count of those dropped.
#[derive(Debug, Default)]
pub struct RecordBatch {
    pub books: Vec<Book>,
    pub skipped: usize,
}

pub fn open(path: &Path) -> Result<BufReader<File>, FatalError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(_) => Err(FatalError::FileNotFound(path.to_path_buf())),
    }
}

/// Reads every pair in the stream. A stream with no tokens, or a pair whose
/// quantity is missing or not an integer, fails the whole read.
pub fn parse<R: Read>(mut reader: R, path: &Path) -> Result<Vec<Record>, FatalError> {
    let mut contents = String::new();
    if let Err(e) = reader.read_to_string(&mut contents) {
        return Err(FatalError::Unreadable(path.to_path_buf(), e));
    }

    let mut tokens = contents.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(FatalError::EmptyFile(path.to_path_buf()));
    }

    let mut records = Vec::new();
    while let Some(isbn) = tokens.next() {
        let quantity = match tokens.next().map(str::parse::<i32>) {
            Some(Ok(quantity)) => quantity,
            _ => return Err(FatalError::WrongDataType(path.to_path_buf())),
        };
        records.push(Record {
            isbn: isbn.to_string(),
            quantity,
        });
    }
    Ok(records)
}

/// Parses the stream and drops records with a bad ISBN length or a negative quantity.
pub fn read_valid<R: Read>(reader: R, path: &Path) -> Result<RecordBatch, FatalError> {
    let mut batch = RecordBatch::default();
    for record in parse(reader, path)? {
        match Book::validated(&record.isbn, record.quantity) {
            Some(book) => batch.books.push(book),
            None => {
                debug!("Skipped invalid record {} {}", record.isbn, record.quantity);
                batch.skipped += 1;
            }
        }
    }
    Ok(batch)
}
