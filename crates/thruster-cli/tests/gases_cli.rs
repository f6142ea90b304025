mod common;

use predicates::str::contains;

use common::{cli, fixture};

#[test]
fn lists_built_in_gases() {
    cli()
        .arg("gases")
        .assert()
        .success()
        .stdout(contains("Available gases (4, built-in):"))
        .stdout(contains("Xenon"))
        .stdout(contains("Iodine"));
}

#[test]
fn lists_gases_from_csv() {
    cli()
        .arg("--gas-data")
        .arg(fixture("gas_data.csv"))
        .arg("gases")
        .assert()
        .success()
        .stdout(contains("Available gases (5,"))
        .stdout(contains("Bismuth"))
        .stdout(contains("208.980"));
}

#[test]
fn gas_data_enables_extra_propellants() {
    cli()
        .arg("--gas-data")
        .arg(fixture("gas_data.csv"))
        .args(["evaluate", "ion", "--gas", "Bismuth", "--va", "1500", "--ib", "1"])
        .assert()
        .success()
        .stdout(contains("Ion engine Bismuth"));
}
