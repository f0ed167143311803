use crate::book::Book;
use log::debug;
use std::cmp::Ordering;

/// Where a key sits in a sorted run of books.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Found(usize),
    NotFound(usize),
}

impl SearchResult {
    /// Compact signed form: the index when found, `-(insertion) - 1` otherwise.
    pub fn encoded(&self) -> isize {
        match *self {
            SearchResult::Found(index) => index as isize,
            SearchResult::NotFound(insertion) => -(insertion as isize) - 1,
        }
    }

}

#[cfg(test)]
impl SearchResult {
    pub fn from_encoded(value: isize) -> Self {
        if value >= 0 {
            SearchResult::Found(value as usize)
        } else {
            SearchResult::NotFound((-value - 1) as usize)
        }
    }

    pub fn found(&self) -> Option<usize> {
        match *self {
            SearchResult::Found(index) => Some(index),
            SearchResult::NotFound(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub result: SearchResult,
    pub iterations: usize,
}

/// Iterative binary search over books sorted by ISBN.
///
/// Bounds are inclusive and signed so the probe order is the same on a shelf
/// whose tail is not sorted yet.
pub fn search(books: &[Book], isbn: &str) -> Probe {
    let mut low: isize = 0;
    let mut high: isize = books.len() as isize - 1;
    let mut iterations = 0;
    let mut result = None;

    while low <= high {
        let mid = low + (high - low) / 2;
        iterations += 1;
        match books[mid as usize].isbn.as_str().cmp(isbn) {
            Ordering::Equal => {
                result = Some(SearchResult::Found(mid as usize));
                break;
            }
            Ordering::Greater => high = mid - 1,
            Ordering::Less => low = mid + 1,
        }
    }

    let result = result.unwrap_or(SearchResult::NotFound(low as usize));
    debug!(
        isbn = isbn, iterations = iterations, position = result.encoded();
        "number of iterations: {}", iterations
    );
    Probe { result, iterations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf(isbns: &[&str]) -> Vec<Book> {
        isbns.iter().map(|isbn| Book::new(isbn, 1)).collect()
    }

    #[test]
    fn empty_slice_inserts_at_zero() {
        let probe = search(&[], "1111111111111");
        assert_eq!(probe.result, SearchResult::NotFound(0));
        assert_eq!(probe.result.encoded(), -1);
        assert_eq!(probe.iterations, 0);
    }

    #[test]
    fn single_element() {
        let books = shelf(&["5555555555555"]);
        assert_eq!(search(&books, "5555555555555").result, SearchResult::Found(0));
        assert_eq!(search(&books, "1111111111111").result, SearchResult::NotFound(0));
        assert_eq!(search(&books, "9999999999999").result, SearchResult::NotFound(1));
    }

    #[test]
    fn every_present_key_is_found() {
        let isbns = [
            "1000000000000",
            "2000000000000",
            "3000000000000",
            "4000000000000",
            "5000000000000",
            "6000000000000",
            "7000000000000",
        ];
        let books = shelf(&isbns);
        for (index, isbn) in isbns.iter().enumerate() {
            assert_eq!(search(&books, isbn).result, SearchResult::Found(index));
        }
    }

    #[test]
    fn absent_keys_report_insertion_point() {
        let books = shelf(&["2000000000000", "4000000000000", "6000000000000"]);
        let cases = [
            ("1000000000000", 0),
            ("3000000000000", 1),
            ("5000000000000", 2),
            ("7000000000000", 3),
        ];
        for (isbn, insertion) in cases {
            let result = search(&books, isbn).result;
            assert_eq!(result, SearchResult::NotFound(insertion));
            let decoded = -result.encoded() - 1;
            assert!((0..=books.len() as isize).contains(&decoded));
            assert_eq!(decoded as usize, insertion);
        }
    }

    #[test]
    fn iterations_are_logarithmic() {
        let books: Vec<Book> = (0..10_000)
            .map(|n| Book::new(&format!("{:013}", n), 0))
            .collect();
        let probe = search(&books, &format!("{:013}", 7_777));
        assert_eq!(probe.result, SearchResult::Found(7_777));
        assert!(probe.iterations <= 14);
    }

    #[test]
    fn encoding_round_trips() {
        let results = [
            SearchResult::Found(0),
            SearchResult::Found(4),
            SearchResult::NotFound(0),
            SearchResult::NotFound(3),
        ];
        for result in results {
            assert_eq!(SearchResult::from_encoded(result.encoded()), result);
        }
    }
}
