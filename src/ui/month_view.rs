use crate::booking::{has_appointments, is_selected, Appointment, BookingSelection};
use crate::calendar::{
    build_month_grid, is_selectable, CalendarDate, CalendarDay, YearMonth, DAYS_PER_WEEK,
};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

const LEGEND: &str = "[ ] selecionado  ( ) hoje  * com agendamento  · indisponível";

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year_month: YearMonth,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub day: CalendarDay,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_selectable: bool,
    pub has_appointments: bool,
}

impl DayCell {
    pub fn new(day: CalendarDay) -> Self {
        Self {
            day,
            is_selected: false,
            is_today: false,
            is_selectable: false,
            has_appointments: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.is_selectable = selectable;
        self
    }

    pub fn with_appointments(mut self, has_appointments: bool) -> Self {
        self.has_appointments = has_appointments;
        self
    }

    fn render(&self) -> String {
        let Some(date) = self.day.date() else {
            return " ".repeat(5);
        };

        let number = format!("{:>2}", date.day());
        let body = if self.is_selected {
            format!("[{number}]")
        } else if self.is_today {
            format!("({number})")
        } else {
            format!(" {number} ")
        };
        let marker = if self.has_appointments {
            '*'
        } else if !self.is_selectable {
            '·'
        } else {
            ' '
        };
        format!("{body}{marker}")
    }
}

pub fn calculate_layout(
    year_month: YearMonth,
    today: CalendarDate,
    selection: Option<&BookingSelection>,
    appointments: &[Appointment],
) -> MonthLayout {
    let cells: Vec<DayCell> = build_month_grid(year_month.year, year_month.month)
        .into_iter()
        .map(|day| match day.date() {
            None => DayCell::new(day),
            Some(date) => DayCell::new(day)
                .with_selected(selection.is_some_and(|s| is_selected(date, s)))
                .with_today(date == today)
                .with_selectable(is_selectable(date, today))
                .with_appointments(has_appointments(date, appointments)),
        })
        .collect();

    let weeks = cells
        .chunks(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut days = chunk.to_vec();
            days.resize(DAYS_PER_WEEK, DayCell::new(CalendarDay::Empty));
            Week { days }
        })
        .collect();

    MonthLayout { year_month, weeks }
}

pub fn render_text(layout: &MonthLayout, show_weekday_headers: bool) -> String {
    let mut lines = Vec::new();
    lines.push(layout.year_month.title_pt());
    lines.push(String::new());

    if show_weekday_headers {
        let header: String = WEEKDAY_HEADERS
            .iter()
            .map(|name| format!("{:^4} ", name))
            .collect();
        lines.push(header.trim_end().to_string());
    }

    for week in &layout.weeks {
        let row: String = week.days.iter().map(DayCell::render).collect();
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(LEGEND.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{select_slot, AppointmentStatus, Service, ServiceCategory, TimeSlot};
    use crate::calendar::Month;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, Month::from_number(month).unwrap(), day).unwrap()
    }

    fn appointment_on(day: CalendarDate) -> Appointment {
        Appointment {
            id: "1".to_string(),
            service: "Manicure".to_string(),
            salon: "Studio Elegance".to_string(),
            date: day,
            time: TimeSlot::parse("10:00").unwrap(),
            duration_minutes: 45,
            price: 25.0,
            status: AppointmentStatus::Confirmed,
        }
    }

    fn selection_on(day: CalendarDate) -> BookingSelection {
        let service = Service {
            id: "3".to_string(),
            name: "Manicure".to_string(),
            description: "Cuidados com as unhas".to_string(),
            duration_minutes: 45,
            price: 25.0,
            original_price: 35.0,
            discount_percent: 29,
            category: ServiceCategory::Unhas,
            available: true,
        };
        select_slot(&BookingSelection::new(service), Some(day), None)
    }

    fn all_cells(layout: &MonthLayout) -> impl Iterator<Item = &DayCell> {
        layout.weeks.iter().flat_map(|w| &w.days)
    }

    #[test]
    fn each_week_has_seven_days() {
        let january = YearMonth::new(2025, Month::January);
        let layout = calculate_layout(january, date(2025, 1, 1), None, &[]);

        assert_eq!(layout.weeks.len(), 5);
        for week in &layout.weeks {
            assert_eq!(week.days.len(), 7);
        }
    }

    #[test]
    fn leading_padding_matches_first_weekday() {
        let january = YearMonth::new(2025, Month::January);
        let layout = calculate_layout(january, date(2025, 1, 1), None, &[]);

        let first_week = &layout.weeks[0];
        assert!(first_week.days[..3].iter().all(|c| c.day.is_empty()));
        assert_eq!(first_week.days[3].day.date(), Some(date(2025, 1, 1)));
    }

    #[test]
    fn past_days_are_not_selectable() {
        let today = date(2024, 12, 15);
        let layout = calculate_layout(YearMonth::new(2024, Month::December), today, None, &[]);

        let selectable: Vec<_> = all_cells(&layout)
            .filter(|c| c.is_selectable)
            .filter_map(|c| c.day.date())
            .collect();

        assert_eq!(selectable.len(), 17);
        assert_eq!(selectable.first(), Some(&today));
    }

    #[test]
    fn today_selection_and_appointments_are_marked() {
        let today = date(2024, 12, 10);
        let selection = selection_on(date(2024, 12, 20));
        let appointments = vec![appointment_on(date(2024, 12, 18))];

        let layout = calculate_layout(
            YearMonth::new(2024, Month::December),
            today,
            Some(&selection),
            &appointments,
        );

        let today_cells: Vec<_> = all_cells(&layout).filter(|c| c.is_today).collect();
        let selected: Vec<_> = all_cells(&layout).filter(|c| c.is_selected).collect();
        let booked: Vec<_> = all_cells(&layout).filter(|c| c.has_appointments).collect();

        assert_eq!(today_cells.len(), 1);
        assert_eq!(selected[0].day.date(), Some(date(2024, 12, 20)));
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].day.date(), Some(date(2024, 12, 18)));
    }

    #[test]
    fn rendered_text_has_title_headers_and_markers() {
        let today = date(2024, 12, 10);
        let selection = selection_on(date(2024, 12, 20));
        let appointments = vec![appointment_on(date(2024, 12, 18))];
        let layout = calculate_layout(
            YearMonth::new(2024, Month::December),
            today,
            Some(&selection),
            &appointments,
        );

        let text = render_text(&layout, true);

        assert!(text.starts_with("Dezembro 2024"));
        assert!(text.contains("Dom"));
        assert!(text.contains("Sáb"));
        assert!(text.contains("(10)"));
        assert!(text.contains("[20]"));
        assert!(text.contains(" 18 *"));
        assert!(text.contains("  9 ·"));
    }

    #[test]
    fn headers_can_be_hidden() {
        let december = YearMonth::new(2024, Month::December);
        let layout = calculate_layout(december, date(2024, 12, 1), None, &[]);

        let text = render_text(&layout, false);

        assert!(!text.contains("Dom"));
    }
}
