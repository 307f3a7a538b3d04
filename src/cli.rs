use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::{anyhow, Context};

use salon_agenda::{
    booking::{
        appointments_on, confirmation_message, filter_services, format_price, Appointment, Period,
        Salon, Service, ServiceCategory, CONFIRMATION_TITLE,
    },
    calendar::{CalendarDate, YearMonth},
    storage::config::Config,
    ui::month_view::{calculate_layout, render_text},
    BookingFlow, Clock, TimeSlot,
};

use crate::sample_data;

const USAGE: &str = concat!(
    "Usage: salon-agenda [--month YYYY/MM] [--appointments DATE] ",
    "[--book SERVICE DATE HH:MM] [--services [QUERY]] [--category CATEGORY] [--slots] [--json]"
);

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Month(Option<YearMonth>),
    Appointments(CalendarDate),
    Book {
        service: String,
        date: CalendarDate,
        time: TimeSlot,
    },
    Services {
        query: String,
        category: Option<ServiceCategory>,
    },
    Slots,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub mode: CliMode,
    pub json: bool,
}

pub fn usage() -> &'static str {
    USAGE
}

pub fn parse_cli_mode() -> Result<CliOptions, String> {
    parse_args(env::args().skip(1))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliOptions, String> {
    let mut mode = CliMode::Month(None);
    let mut json = false;
    let mut services_query: Option<String> = None;
    let mut category = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => {
                json = true;
            }
            "--month" => {
                let value = args.next().ok_or("--month requires YYYY/MM")?;
                let year_month = YearMonth::parse(&value).map_err(|e| e.to_string())?;
                mode = CliMode::Month(Some(year_month));
            }
            "--appointments" => {
                let value = args.next().ok_or("--appointments requires a date")?;
                let date = CalendarDate::parse(&value).map_err(|e| e.to_string())?;
                mode = CliMode::Appointments(date);
            }
            "--book" => {
                let service = args.next().ok_or("--book requires SERVICE DATE HH:MM")?;
                let date = args.next().ok_or("--book requires SERVICE DATE HH:MM")?;
                let time = args.next().ok_or("--book requires SERVICE DATE HH:MM")?;
                mode = CliMode::Book {
                    service,
                    date: CalendarDate::parse(&date).map_err(|e| e.to_string())?,
                    time: TimeSlot::parse(&time).map_err(|e| e.to_string())?,
                };
            }
            "--services" => {
                let query = if args.peek().is_some_and(|next| !next.starts_with("--")) {
                    args.next().unwrap_or_default()
                } else {
                    String::new()
                };
                services_query = Some(query);
            }
            "--category" => {
                let value = args.next().ok_or("--category requires a category name")?;
                category = Some(
                    ServiceCategory::parse(&value)
                        .ok_or_else(|| format!("Unknown category: {}", value))?,
                );
            }
            "--slots" => {
                mode = CliMode::Slots;
            }
            "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if services_query.is_some() || category.is_some() {
        mode = CliMode::Services {
            query: services_query.unwrap_or_default(),
            category,
        };
    }

    Ok(CliOptions { mode, json })
}

pub fn run<C: Clock>(options: CliOptions, config: &Config, clock: C) -> anyhow::Result<()> {
    match options.mode {
        CliMode::Month(year_month) => {
            let today = clock.today();
            let year_month = year_month.unwrap_or_else(|| YearMonth::of(today));
            run_month_mode(year_month, today, config)
        }
        CliMode::Appointments(date) => run_appointments_mode(date, options.json, config),
        CliMode::Book { service, date, time } => {
            run_booking_mode(&service, date, time, options.json, config, clock)
        }
        CliMode::Services { query, category } => run_services_mode(&query, category, options.json),
        CliMode::Slots => {
            run_slots_mode();
            Ok(())
        }
    }
}

fn run_month_mode(
    year_month: YearMonth,
    today: CalendarDate,
    config: &Config,
) -> anyhow::Result<()> {
    let appointments = sample_data::appointments();
    let layout = calculate_layout(year_month, today, None, &appointments);
    let text = render_text(&layout, config.display.show_weekday_headers);

    if config.display.use_pager {
        display_with_pager(&text)?;
    } else {
        println!("{text}");
    }
    Ok(())
}

fn run_appointments_mode(date: CalendarDate, json: bool, config: &Config) -> anyhow::Result<()> {
    let appointments = sample_data::appointments();
    let matching = appointments_on(date, &appointments);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    println!("Agendamentos – {}", date.format(&config.display.date_format));
    if matching.is_empty() {
        println!("Nenhum agendamento.");
    }
    for appointment in matching {
        println!("- {}", format_appointment_line(appointment));
    }
    Ok(())
}

/// Runs the whole booking flow against the sample catalog.
pub fn book<C: Clock>(
    service: &str,
    date: CalendarDate,
    time: TimeSlot,
    config: &Config,
    clock: C,
) -> anyhow::Result<(Appointment, Option<Salon>)> {
    let service = sample_data::find_service(service)
        .ok_or_else(|| anyhow!("Serviço desconhecido: {}", service))?;
    let salon = sample_data::salons()
        .into_iter()
        .find(|salon| salon.name == config.booking.salon);
    if salon.is_none() {
        tracing::warn!(salon = %config.booking.salon, "configured salon is not in the catalog");
    }

    let mut flow = BookingFlow::new(clock);
    flow.choose_service(service)?;
    flow.pick_date(date)?;
    flow.pick_time(time)?;
    let appointment = flow
        .confirm(&config.booking.salon, config.booking.default_status)
        .context("booking could not be confirmed")?;

    Ok((appointment, salon))
}

fn run_booking_mode<C: Clock>(
    service: &str,
    date: CalendarDate,
    time: TimeSlot,
    json: bool,
    config: &Config,
    clock: C,
) -> anyhow::Result<()> {
    let (appointment, salon) = book(service, date, time, config, clock)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&appointment)?);
        return Ok(());
    }

    println!("{CONFIRMATION_TITLE}");
    println!("{}", confirmation_message(&appointment));
    if let Some(salon) = salon {
        println!("Endereço: {}", salon.address);
    }
    println!("Valor: {}", format_price(appointment.price));
    Ok(())
}

fn run_services_mode(
    query: &str,
    category: Option<ServiceCategory>,
    json: bool,
) -> anyhow::Result<()> {
    let services = sample_data::services();
    let matching = filter_services(&services, query, category);

    if json {
        println!("{}", serde_json::to_string_pretty(&matching)?);
        return Ok(());
    }

    if matching.is_empty() {
        println!("Nenhum serviço encontrado.");
    }
    for service in matching {
        println!("- {}", format_service_line(service));
    }
    Ok(())
}

fn run_slots_mode() {
    for period in [Period::Morning, Period::Afternoon] {
        let labels: Vec<String> = TimeSlot::in_period(period).map(|s| s.to_string()).collect();
        println!("{}: {}", period.label_pt(), labels.join(" "));
    }
}

fn format_service_line(service: &Service) -> String {
    format!(
        "{} {} [{}] {} min, {} (de {}, economize {}, -{}%)",
        service.id,
        service.name,
        service.category.label_pt(),
        service.duration_minutes,
        format_price(service.price),
        format_price(service.original_price),
        format_price(service.savings()),
        service.discount_percent
    )
}

fn format_appointment_line(appointment: &Appointment) -> String {
    format!(
        "{} {} @ {} ({} min, {}) [{}]",
        appointment.time,
        appointment.service,
        appointment.salon,
        appointment.duration_minutes,
        format_price(appointment.price),
        appointment.status.label_pt()
    )
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = match env::var("PAGER") {
        Ok(value) => value,
        Err(_) => {
            println!("{text}");
            return Ok(());
        }
    };
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(e) => {
            tracing::warn!(pager = cmd, error = %e, "pager unavailable");
            println!("{text}");
        }
    }

    Ok(())
}
