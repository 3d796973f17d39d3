//! Compresses 100 mol of nitrogen from 100 L down to 1 L at 300 K and compares
//! the ideal gas law against the Van der Waals equation.
//!
//! Run with `RUST_LOG=debug` to see why points are undefined.

use std::error::Error;

use twine_gas::{
    models::gas::{
        GivenPressureConfig,
        comparison::{Comparison, sweep},
        given_pressure,
    },
    support::{
        constraint::StrictlyPositive,
        gas::{GasModel, IdealGas, VanDerWaals, fluid::Nitrogen},
    },
};
use uom::si::{
    amount_of_substance::mole,
    f64::{AmountOfSubstance, Pressure, ThermodynamicTemperature, Volume},
    pressure::{kilopascal, megapascal},
    ratio::percent,
    thermodynamic_temperature::kelvin,
    volume::liter,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let moles = AmountOfSubstance::new::<mole>(100.0);
    let temperature = ThermodynamicTemperature::new::<kelvin>(300.0);

    let ideal = IdealGas::new(moles)?;
    let nitrogen = VanDerWaals::for_fluid::<Nitrogen>(moles)?;

    println!("=== Gas Law Comparison: Ideal vs Real ===\n");
    println!(
        "System: {} mol at {} K",
        moles.get::<mole>(),
        temperature.get::<kelvin>()
    );
    println!("{}", "-".repeat(60));
    println!(
        "{:<15} | {:<15} | {:<15} | {:<10}",
        "Volume (L)", "Ideal P (kPa)", "Real P (kPa)", "% Diff"
    );
    println!("{}", "-".repeat(60));

    let volumes = [100.0, 50.0, 20.0, 10.0, 5.0, 2.0, 1.0].map(Volume::new::<liter>);
    for row in sweep(&ideal, &nitrogen, volumes, temperature) {
        println!("{}", format_row(&row));
    }

    println!("{}", "-".repeat(60));
    println!(
        "\nAs volume decreases, the real gas deviates from the ideal gas:\n\
         molecules occupy space (b) and attract each other (a)."
    );

    let target = Pressure::new::<megapascal>(5.0);
    let bracket = [Volume::new::<liter>(4.0), Volume::new::<liter>(1000.0)];
    println!("\nVolume at {} MPa:", target.get::<megapascal>());
    for gas in [&ideal as &dyn GasModel, &nitrogen] {
        let volume = given_pressure(
            &gas,
            StrictlyPositive::new(target)?,
            temperature,
            bracket,
            GivenPressureConfig::default(),
        )?;
        println!("  {:<10} {:.3} L", gas.label(), volume.get::<liter>());
    }

    Ok(())
}

fn format_row(row: &Comparison) -> String {
    let volume = row.volume.get::<liter>();
    let ideal = match &row.reference {
        Ok(p) => format!("{:.2}", p.get::<kilopascal>()),
        Err(_) => "CRITICAL".to_owned(),
    };

    match (&row.candidate, row.deviation()) {
        (Ok(p), Some(deviation)) => format!(
            "{volume:<15.1} | {ideal:<15} | {:<15.2} | {:<10.1}",
            p.get::<kilopascal>(),
            deviation.get::<percent>()
        ),
        _ => format!("{volume:<15.1} | {ideal:<15} | {:<15} | ---", "CRITICAL"),
    }
}
