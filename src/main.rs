mod args;
mod config;
mod reader;
mod writer;

use tbe::input::ActionRecord;
use tbe::present::LogPresenter;
use tbe::services::Teller;
use tbe::Result;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let paths = args::parse_input_args()?;
    log::debug!("Found filepaths as input args: {:?}, {:?}", paths.accounts, paths.actions);

    let seeds = reader::load_seeds(paths.accounts)?;
    log::debug!("Loaded {} seed accounts", seeds.len());

    let mut teller = tbe::build_teller(seeds, LogPresenter)?;

    process_actions(&mut teller, paths.actions)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&teller)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the actions file and run each action to completion. A rejected or
/// malformed action is logged and skipped; nothing is fatal here.
fn process_actions(teller: &mut Teller<LogPresenter>, actions: std::path::PathBuf) -> Result {
    let mut rdr = reader::build_csv_reader(actions)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<ActionRecord>() {
        log::debug!("Parsing record into ActionRecord: {record:?}");
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing record into Action: {record:?}");
        let action = match record.parse_action() {
            Ok(action) => action,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = teller.process(action) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

/// Build report for the surviving accounts, and write it to stdout
fn report_to_std_out(teller: &Teller<LogPresenter>) -> Result {
    let report = teller.build_report();
    log::debug!("Successfully built reports for {} accounts", report.len());

    let mut wtr = writer::build_csv_writer();

    log::debug!("Serializing reports...");
    for account_report in report.iter() {
        log::debug!("Serializing report: {account_report:?}");
        wtr.serialize(account_report)?;
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    Ok(())
}
