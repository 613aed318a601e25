use std::fs;
use std::path::{Path, PathBuf};

use heatpump_savings::boiler::fuel_db::{self, FuelTable, InputError, COL_CO2};
use rstest::rstest;
use rust_xlsxwriter::Workbook;

const HEADER: &str = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg";

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("heatpump_{}_{name}", std::process::id()))
}

const GOOD_CSV: &str = "\
Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg,Notes
Wood chips, 3200, 72, 9, 1.7, local supply
Furnace Oil,10000,85,80,3.1,
";

#[test]
fn builtin_table_has_six_fuels() {
    let table = FuelTable::builtin();
    let names: Vec<&str> = table.names().collect();
    assert_eq!(
        names,
        ["Biomass", "LPG", "PNG", "Diesel", "Coal", "Electric (resistive)"]
    );
}

#[test]
fn csv_table_loads_and_ignores_extra_columns() {
    let table = FuelTable::from_csv_reader(GOOD_CSV.as_bytes()).expect("csv");
    assert_eq!(table.records().len(), 2);
    let wood = table.find("wood chips").expect("wood");
    assert_eq!(wood.calorific_value_kcal_per_kg, 3200.0);
    assert_eq!(wood.efficiency_pct, 72.0);
    assert_eq!(wood.unit_cost, 9.0);
    assert_eq!(wood.co2_kg_per_kg, 1.7);
}

#[test]
fn missing_column_is_reported() {
    let csv = "Fuel,CV_default,Eff_default,Fuel_Cost\nCoal,5000,65,10\n";
    let err = FuelTable::from_csv_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::MissingColumn(c) if c == COL_CO2), "{err}");
}

#[test]
fn duplicate_fuel_is_reported() {
    let csv = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg\nCoal,5000,65,10,2.5\ncoal,4800,60,9,2.4\n";
    let err = FuelTable::from_csv_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::DuplicateFuel(ref n) if n == "coal"), "{err}");
}

#[test]
fn non_numeric_value_is_reported() {
    let csv = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg\nCoal,high,65,10,2.5\n";
    let err = FuelTable::from_csv_reader(csv.as_bytes()).unwrap_err();
    match err {
        InputError::NonNumeric { fuel, column, value } => {
            assert_eq!(fuel, "Coal");
            assert_eq!(column, "CV_default");
            assert_eq!(value, "high");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_table_is_rejected() {
    let csv = "Fuel,CV_default,Eff_default,Fuel_Cost,CO2_Emn/kg\n";
    let err = FuelTable::from_csv_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::Empty));
}

#[test]
fn toml_table_loads() {
    let content = r#"
[[fuel]]
Fuel = "Rice husk"
CV_default = 3100.0
Eff_default = 70.0
Fuel_Cost = 6.5
"CO2_Emn/kg" = 1.6
"#;
    let table = FuelTable::from_toml_str(content).expect("toml");
    let husk = table.find("Rice husk").expect("husk");
    assert_eq!(husk.unit_cost, 6.5);
}

#[test]
fn plain_mapping_is_accepted() {
    let table = FuelTable::from_tuples([
        ("Coal", [5000.0, 65.0, 10.0, 2.5]),
        ("Diesel", [10500.0, 85.0, 100.0, 3.2]),
    ])
    .expect("tuples");
    assert_eq!(table.find("diesel").expect("diesel").co2_kg_per_kg, 3.2);
}

#[test]
fn unreadable_file_falls_back_to_builtin() {
    let table = fuel_db::load_or_default(Some(Path::new("does/not/exist.csv")));
    assert_eq!(table, FuelTable::builtin());
    let table = fuel_db::load_or_default(None);
    assert_eq!(table, FuelTable::builtin());
}

#[test]
fn malformed_file_falls_back_to_builtin() {
    let path = temp_path("malformed_fuels.csv");
    fs::write(&path, format!("{HEADER}\nCoal,5000,65,ten,2.5\n")).expect("write");
    assert!(FuelTable::load(&path).is_err());
    let table = fuel_db::load_or_default(Some(&path));
    assert_eq!(table, FuelTable::builtin());
    let _ = fs::remove_file(&path);
}

#[rstest]
#[case("NaN", "65", "10", "2.5", "CV_default")]
#[case("5000", "inf", "10", "2.5", "Eff_default")]
#[case("5000", "65", "-infinity", "2.5", "Fuel_Cost")]
#[case("5000", "65", "10", "Infinity", "CO2_Emn/kg")]
fn non_finite_csv_value_is_reported(
    #[case] cv: &str,
    #[case] eff: &str,
    #[case] cost: &str,
    #[case] co2: &str,
    #[case] bad_column: &str,
) {
    let csv = format!("{HEADER}\nCoal,{cv},{eff},{cost},{co2}\n");
    let err = FuelTable::from_csv_reader(csv.as_bytes()).unwrap_err();
    match err {
        InputError::NonNumeric { fuel, column, .. } => {
            assert_eq!(fuel, "Coal");
            assert_eq!(column, bad_column);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_toml_value_is_reported() {
    let content = r#"
[[fuel]]
Fuel = "Coal"
CV_default = 5000.0
Eff_default = 65.0
Fuel_Cost = nan
"CO2_Emn/kg" = inf
"#;
    let err = FuelTable::from_toml_str(content).unwrap_err();
    assert!(
        matches!(err, InputError::NonNumeric { column, .. } if column == "Fuel_Cost"),
        "{err}"
    );
}

#[test]
fn non_finite_tuple_value_is_reported() {
    let err = FuelTable::from_tuples([("Coal", [5000.0, f64::NAN, 10.0, 2.5])]).unwrap_err();
    assert!(matches!(err, InputError::NonNumeric { column, .. } if column == "Eff_default"));
}

#[rstest]
#[case(",5000,65,10,2.5")]
#[case("   ,5000,65,10,2.5")]
fn empty_fuel_name_is_reported(#[case] row: &str) {
    let csv = format!("{HEADER}\nCoal,5000,65,10,2.5\n{row}\n");
    let err = FuelTable::from_csv_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::EmptyFuelName(2)), "{err}");
}

#[test]
fn xlsx_table_loads() {
    let path = temp_path("fuels.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, title) in (0u16..).zip(HEADER.split(',')) {
        sheet.write_string(0, col, title).expect("header");
    }
    sheet.write_string(1, 0, "Rice husk").expect("name");
    for (col, v) in (1u16..).zip([3100.0, 70.0, 6.5, 1.6]) {
        sheet.write_number(1, col, v).expect("number");
    }
    sheet.write_string(2, 0, "Coal").expect("name");
    for (col, v) in (1u16..).zip(["5000", "65", "10", "2.5"]) {
        sheet.write_string(2, col, v).expect("numeric text");
    }
    workbook.save(&path).expect("save");

    let table = FuelTable::load(&path).expect("xlsx");
    let _ = fs::remove_file(&path);
    assert_eq!(table.records().len(), 2);
    let husk = table.find("rice husk").expect("husk");
    assert_eq!(husk.calorific_value_kcal_per_kg, 3100.0);
    assert_eq!(husk.unit_cost, 6.5);
    assert_eq!(table.find("Coal").expect("coal").co2_kg_per_kg, 2.5);
}

#[test]
fn xlsx_table_is_validated_like_csv() {
    let path = temp_path("bad_fuels.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, title) in (0u16..).zip(["Fuel", "CV_default", "Eff_default", "Fuel_Cost"]) {
        sheet.write_string(0, col, title).expect("header");
    }
    sheet.write_string(1, 0, "Coal").expect("name");
    workbook.save(&path).expect("save");

    let err = FuelTable::load(&path).unwrap_err();
    let _ = fs::remove_file(&path);
    assert!(matches!(err, InputError::MissingColumn(c) if c == COL_CO2), "{err}");
}

#[test]
fn unsupported_extension_is_rejected() {
    let err = FuelTable::load(Path::new("fuels.json")).unwrap_err();
    assert!(matches!(err, InputError::UnsupportedFormat(ref e) if e == "json"));
}
