//! The interactive search loop. The loop has exactly two states: awaiting
//! input (one search iteration runs) and done (the user declined another
//! search). A blank field does not re-prompt in place; it ends the current
//! iteration and the outer loop drives the next one.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::db::CourseStore;
use crate::ui::prompts::{prompt_line, yes_no_menu};

/// Drive search iterations until the user answers "n" to the repeat prompt.
pub fn run_search_loop(
    store: &impl CourseStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut done = false;
    while !done {
        done = search_once(store, input, output)?;
    }
    Ok(())
}

/// Run one search iteration and report whether the loop should stop. Blank
/// fields abort the iteration early without touching the store, so the
/// caller simply retries.
fn search_once(
    store: &impl CourseStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<bool> {
    let subject = prompt_line(input, output, "Enter a subject: ")?;
    if subject.is_empty() {
        writeln!(output, "Invalid input, running search again")
            .context("failed to write message")?;
        return Ok(false);
    }

    let catalog = prompt_line(input, output, "Enter a CatalogNbr: ")?;
    if catalog.is_empty() {
        writeln!(output, "Invalid input, running search again")
            .context("failed to write message")?;
        return Ok(false);
    }

    print_search_result(store, output, &subject, &catalog)?;

    let run_again = yes_no_menu(input, output, "Run another search?")?;
    Ok(!run_again)
}

/// Look up the subject/catalog pair and print the outcome. A store failure
/// and an empty result set are collapsed into the same "No results found"
/// message; when the scan yields several records only the first is shown.
fn print_search_result(
    store: &impl CourseStore,
    output: &mut impl Write,
    subject: &str,
    catalog: &str,
) -> Result<()> {
    match store.scan_courses(subject, catalog) {
        Ok(records) if !records.is_empty() => {
            let course = &records[0];
            writeln!(
                output,
                "The title of {} {} is {}.",
                course.subject, course.catalog_nbr, course.title
            )
            .context("failed to write search result")?;
        }
        Ok(_) | Err(_) => {
            writeln!(output, "No results found").context("failed to write search result")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::StoreError;
    use crate::models::CourseRecord;
    use std::cell::RefCell;
    use std::io::Cursor;

    /// Recording fake so tests can assert which lookups ran and script the
    /// store's answer.
    struct FakeStore {
        results: Result<Vec<CourseRecord>, StoreError>,
        scans: RefCell<Vec<(String, String)>>,
    }

    impl FakeStore {
        fn returning(results: Result<Vec<CourseRecord>, StoreError>) -> Self {
            Self {
                results,
                scans: RefCell::new(Vec::new()),
            }
        }
    }

    impl CourseStore for FakeStore {
        fn create_table(&self) -> Result<(), StoreError> {
            unreachable!("search loop never creates tables")
        }

        fn put_course(&self, _record: &CourseRecord) -> Result<(), StoreError> {
            unreachable!("search loop never writes records")
        }

        fn scan_courses(
            &self,
            subject: &str,
            catalog_nbr: &str,
        ) -> Result<Vec<CourseRecord>, StoreError> {
            self.scans
                .borrow_mut()
                .push((subject.to_string(), catalog_nbr.to_string()));
            match &self.results {
                Ok(records) => Ok(records.clone()),
                Err(_) => Err(StoreError::NoHomeDir),
            }
        }
    }

    fn course(course_id: i64, subject: &str, catalog_nbr: &str, title: &str) -> CourseRecord {
        CourseRecord {
            course_id,
            subject: subject.to_string(),
            catalog_nbr: catalog_nbr.to_string(),
            title: title.to_string(),
            num_credits: 3,
        }
    }

    fn run_loop(store: &FakeStore, input: &str) -> String {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        run_search_loop(store, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn single_match_prints_the_title_line() {
        let store = FakeStore::returning(Ok(vec![course(
            0,
            "ENG",
            "100",
            "Introduction to ENG at UMGC",
        )]));
        let output = run_loop(&store, "ENG\n100\nn\n");

        assert!(output.contains("The title of ENG 100 is Introduction to ENG at UMGC.\n"));
        let scans = store.scans.borrow();
        assert_eq!(scans.len(), 1);
        assert_eq!(scans[0], ("ENG".to_string(), "100".to_string()));
    }

    #[test]
    fn zero_matches_print_no_results_then_ask_again() {
        let store = FakeStore::returning(Ok(Vec::new()));
        let output = run_loop(&store, "ENG\n100\nn\n");

        let no_results = output.find("No results found").unwrap();
        let ask_again = output.find("Run another search? (Y/N)").unwrap();
        assert!(no_results < ask_again);
    }

    #[test]
    fn store_failure_reads_as_no_results() {
        let store = FakeStore::returning(Err(StoreError::NoHomeDir));
        let output = run_loop(&store, "ENG\n100\nn\n");

        assert!(output.contains("No results found"));
    }

    #[test]
    fn blank_subject_skips_the_store_and_retries() {
        let store = FakeStore::returning(Ok(Vec::new()));
        let output = run_loop(&store, "\nENG\n100\nn\n");

        assert!(output.contains("Invalid input, running search again"));
        // The blank iteration never reached the store; only the retry did.
        assert_eq!(store.scans.borrow().len(), 1);
    }

    #[test]
    fn blank_catalog_skips_the_store_and_retries() {
        let store = FakeStore::returning(Ok(Vec::new()));
        let output = run_loop(&store, "ENG\n   \nENG\n100\nn\n");

        assert!(output.contains("Invalid input, running search again"));
        assert_eq!(store.scans.borrow().len(), 1);
    }

    #[test]
    fn only_the_first_of_several_matches_is_shown() {
        let store = FakeStore::returning(Ok(vec![
            course(0, "ENG", "100", "Introduction to ENG at UMGC"),
            course(7, "ENG", "100", "A duplicate row"),
        ]));
        let output = run_loop(&store, "ENG\n100\nn\n");

        assert!(output.contains("Introduction to ENG at UMGC"));
        assert!(!output.contains("A duplicate row"));
    }

    #[test]
    fn yes_answer_runs_another_iteration() {
        let store = FakeStore::returning(Ok(Vec::new()));
        let output = run_loop(&store, "ENG\n100\ny\nSDEV\n300\nn\n");

        assert_eq!(store.scans.borrow().len(), 2);
        assert_eq!(output.matches("Enter a subject: ").count(), 2);
    }
}
