mod setup;

use predicates::str::contains;
use setup::{make_cli, DEFAULT_TIMEOUT};

#[test]
fn queries_lists_all_twenty_without_a_database() {
    let assert = make_cli().timeout(DEFAULT_TIMEOUT).arg("queries").assert();

    assert
        .success()
        .stdout(contains("Check Availability of eBooks vs Physical Books"))
        .stdout(contains("Year with the Highest Average Book Price"))
        .stdout(contains("Books with a Specific Keyword in the Title"))
        .stdout(contains("(requires a keyword)"))
        .stdout(contains("20."));
}

#[test]
fn run_unknown_query_fails_before_connecting() {
    let assert = make_cli()
        .timeout(DEFAULT_TIMEOUT)
        .arg("run")
        .arg("No Such Analysis")
        .assert();

    assert.failure().stderr(contains("unknown query"));
}

#[test]
fn run_keyword_query_without_keyword_fails_before_connecting() {
    let assert = make_cli()
        .timeout(DEFAULT_TIMEOUT)
        .arg("run")
        .arg("Books with a Specific Keyword in the Title")
        .assert();

    assert.failure().stderr(contains("requires a keyword"));
}

#[test]
fn help_mentions_the_catalog() {
    let assert = make_cli().timeout(DEFAULT_TIMEOUT).arg("--help").assert();

    assert
        .success()
        .stdout(contains("Search and analyze the Bookscape book catalog"))
        .stdout(contains("queries"))
        .stdout(contains("search"));
}
