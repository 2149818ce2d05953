use color_eyre::eyre::OptionExt as _;
use csv::ReaderBuilder;
use csv::Trim;
use toybank::agency::Agency;
use toybank::operation::Operation;

mod csv_report;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ops_file_path = std::env::args().nth(1).ok_or_eyre("no operations CSV supplied")?;

    let mut ops_reader = ReaderBuilder::new().trim(Trim::All).from_path(ops_file_path)?;

    let mut agency = Agency::new();

    for op_res in ops_reader.deserialize::<Operation>() {
        let Ok(op) = op_res else {
            eprintln!("error deserializing operation, error={op_res:?}");
            continue;
        };

        if let Err(error) = agency.apply(op.clone()) {
            eprintln!("error applying operation, op={op:?}, error={error:?}");
        }
    }

    let mut accounts = agency.accounts().values().collect::<Vec<_>>();
    accounts.sort_by_key(|account| account.id());
    csv_report::write_to_stdout(accounts)?;

    Ok(())
}
