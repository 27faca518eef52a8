use crate::cli::ReportKind;
use crate::infra::{InMemoryApplicationRepository, InProcessTransport};
use campus_content::admissions::{
    AdmissionsForm, AdmissionsService, ApplicationPayload, FormPhase, HttpSubmissionTransport,
    ProgramTypeField, ScheduleOption, SubmissionTransport,
};
use campus_content::catalog::{
    combined_ba_tuition, degree_programs, disclosures_by_category, program_by_slug, programs,
    tuition_for_program,
};
use campus_content::error::AppError;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Program slug (e.g. associate-of-arts); omit to list everything
    #[arg(long)]
    pub(crate) slug: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Base URL of a running service; omit to run the pipeline in process
    #[arg(long)]
    pub(crate) base_url: Option<String>,
}

pub(crate) fn run_catalog_report(kind: ReportKind, args: CatalogArgs) -> Result<(), AppError> {
    match kind {
        ReportKind::Programs => match args.slug {
            Some(slug) => print_program(&slug),
            None => print_program_list(),
        },
        ReportKind::Tuition => match args.slug {
            Some(slug) => print_tuition(&slug),
            None => print_tuition_summary(),
        },
        ReportKind::Disclosures => print_disclosures(),
    }
    Ok(())
}

fn print_program_list() {
    println!("Published programs:");
    for program in programs() {
        println!(
            "  {:<34} {:<26} ${}",
            program.slug,
            program.degree_type.label(),
            program.tuition
        );
    }
    println!();
    println!("Degree programs (avocational certificate excluded):");
    for program in degree_programs() {
        println!("  {} — {}", program.short_name, program.duration);
    }
}

fn print_program(slug: &str) {
    let Some(program) = program_by_slug(slug) else {
        println!("no program with slug '{slug}'");
        return;
    };

    println!("{} ({})", program.name, program.degree_type.label());
    println!("  duration:       {}", program.duration);
    println!("  credit units:   {}", program.credit_units);
    println!("  tuition:        ${}", program.tuition);
    println!("  total charges:  ${}", program.total_charges);
    println!("  estimated cost: ${}", program.total_estimated_cost);
    if let Some(accreditor) = program.accreditor {
        println!("  accreditor:     {accreditor}");
    }
    println!();
    println!("{}", program.description);

    if !program.courses.is_empty() {
        println!();
        println!("Courses:");
        for course in &program.courses {
            println!("  {:<8} {:<36} {} units", course.code, course.name, course.units);
        }
    }
    if !program.lectures.is_empty() {
        println!();
        println!("Lectures:");
        for outline in &program.lectures {
            println!("  {:<32} {}", outline.name, outline.description);
        }
        println!("Studios:");
        for outline in &program.studios {
            println!("  {:<32} {}", outline.name, outline.description);
        }
    }
}

fn print_tuition_summary() {
    println!("Cost overview:");
    for table in programs()
        .iter()
        .filter_map(|program| tuition_for_program(program.slug))
    {
        println!(
            "  {:<34} charges ${:<8} estimated ${}",
            table.program_slug, table.total_charges, table.total_estimated_cost
        );
    }
    println!();
    println!(
        "Combined Associate + Bachelor tuition: ${}",
        combined_ba_tuition()
    );
}

fn print_tuition(slug: &str) {
    let Some(table) = tuition_for_program(slug) else {
        println!("no tuition table for slug '{slug}'");
        return;
    };

    println!("Cost breakdown for {}:", table.program_slug);
    println!("  tuition:          ${}", table.tuition);
    println!("  registration fee: ${}", table.registration_fee);
    println!("  STLM fee:         ${}", table.stlm_fee);
    println!("  total charges:    ${}", table.total_charges);
    println!("  supplies (est.):  ${}", table.supply_cost);
    println!("  estimated cost:   ${}", table.total_estimated_cost);
    println!();
    println!("Payment schedule:");
    for row in &table.payment_schedule {
        println!(
            "  {:<22} {:>2} units/term  ${:<7} x {} terms",
            row.enrollment, row.units_per_term, row.tuition_per_term, row.terms_to_complete
        );
    }
    println!();
    println!("Payment options:");
    for option in &table.payment_options {
        match option.per_period {
            Some(per_period) => println!(
                "  {:<16} ${} total (${} per period) — {}",
                option.kind, option.amount, per_period, option.description
            ),
            None => println!(
                "  {:<16} ${} total — {}",
                option.kind, option.amount, option.description
            ),
        }
    }
    for note in &table.notes {
        println!("  note: {note}");
    }
}

fn print_disclosures() {
    for (category, documents) in disclosures_by_category() {
        println!("{}:", category.label());
        for document in documents {
            println!("  {:<44} {}", document.name, document.path);
        }
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    match args.base_url {
        Some(base_url) => {
            let transport = HttpSubmissionTransport::new(&base_url);
            println!("posting to {}", transport.endpoint());
            let phase = drive_form(transport).await;
            print_outcome(&phase);
        }
        None => {
            let repository = Arc::new(InMemoryApplicationRepository::default());
            let service = Arc::new(AdmissionsService::new(repository));
            println!("running the intake pipeline in process");
            let transport = InProcessTransport::new(service.clone());
            let phase = drive_form(&transport).await;
            print_outcome(&phase);

            let last_id = transport
                .last_id
                .lock()
                .expect("demo mutex poisoned")
                .clone();
            if let Some(id) = last_id {
                let record = service.get(&id)?;
                let view = record.status_view();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&view).expect("view serializes")
                );
            }
        }
    }
    Ok(())
}

async fn drive_form<T: SubmissionTransport>(transport: T) -> FormPhase {
    let mut form = AdmissionsForm::new(transport);
    form.draft = sample_payload();
    form.select_program_type(Some(ProgramTypeField::Combined));

    // The schedule section is still untouched, so the first submit attempt
    // shows the validation gate.
    match form.submit().await {
        Err(violation) => println!("blocked before the network: {violation}"),
        Ok(()) => println!("unexpected: incomplete draft was accepted"),
    }

    form.draft.schedule = ScheduleOption::Evening.field_value().to_string();
    if let Err(violation) = form.submit().await {
        println!("still blocked: {violation}");
    }

    form.phase().clone()
}

fn print_outcome(phase: &FormPhase) {
    match phase {
        FormPhase::Success => println!("application accepted"),
        FormPhase::Error(message) => println!("submission failed: {message}"),
        FormPhase::Idle | FormPhase::Submitting => println!("submission did not complete"),
    }
}

fn sample_payload() -> ApplicationPayload {
    ApplicationPayload {
        first_name: "Avery".to_string(),
        last_name: "Stone".to_string(),
        email: "avery.stone@example.com".to_string(),
        phone: "(949) 555-0102".to_string(),
        birth_date: "1998-05-21".to_string(),
        address_line1: "47 Driftwood Terrace".to_string(),
        address_line2: String::new(),
        city: "Newport Beach".to_string(),
        state: "CA".to_string(),
        zip: "92660".to_string(),
        california_resident: Some(true),
        high_school: "Corona del Mar High School".to_string(),
        graduation_date: "2016-06-10".to_string(),
        emergency_contact_name: "Jordan Stone".to_string(),
        emergency_contact_phone: "(949) 555-0110".to_string(),
        referral_source: "Instagram".to_string(),
        terms_accepted: true,
        program_type: None,
        schedule: String::new(),
        lecture: String::new(),
        studio: String::new(),
        course: String::new(),
    }
}
