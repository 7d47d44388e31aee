use api_shared::HealthService;
use clap::{Parser, Subcommand};
use medform_core::{
    CoreConfig, FhirBundleService, FormExtractionService, MedicationValidationService,
    StatusService,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "medform")]
#[command(about = "Medical form service CLI: prints the payloads the REST API returns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract patient fields from a form
    Extract {
        /// Form type (defaults to "medical")
        #[arg(long)]
        form_type: Option<String>,
    },
    /// Validate medications
    Validate {
        /// Medication names
        medications: Vec<String>,
    },
    /// Generate a FHIR transaction bundle
    Fhir {
        /// Patient data as a JSON object
        #[arg(long)]
        patient_data: Option<String>,
    },
    /// Show the service descriptor
    Status,
    /// Show the health check response
    Health,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = CoreConfig::default();

    match cli.command {
        Commands::Extract { form_type } => {
            let form_type = form_type.map(Value::String);
            print_json(&FormExtractionService::new().respond(form_type.as_ref(), None))?;
        }
        Commands::Validate { medications } => {
            let medications = Value::from(medications);
            print_json(&MedicationValidationService::new().respond(Some(&medications))?)?;
        }
        Commands::Fhir { patient_data } => {
            let patient_data = patient_data
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()?;
            print_json(&FhirBundleService::new().respond(patient_data.as_ref()))?;
        }
        Commands::Status => {
            print_json(&StatusService::new().describe(&cfg))?;
        }
        Commands::Health => {
            print_json(&HealthService::check_health(cfg.version()))?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_arguments() {
        let cli = Cli::try_parse_from(["medform", "validate", "Aspirin", "Ibuprofen"])
            .expect("valid arguments");
        match cli.command {
            Commands::Validate { medications } => {
                assert_eq!(medications, vec!["Aspirin", "Ibuprofen"]);
            }
            _ => panic!("expected validate subcommand"),
        }
    }

    #[test]
    fn parses_extract_form_type() {
        let cli = Cli::try_parse_from(["medform", "extract", "--form-type", "intake"])
            .expect("valid arguments");
        assert!(matches!(
            cli.command,
            Commands::Extract { form_type: Some(ref t) } if t == "intake"
        ));
    }
}
