use salon_agenda::{
    booking::{Appointment, AppointmentStatus, Salon, Service, ServiceCategory, TimeSlot},
    calendar::{CalendarDate, Month},
};

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            name: "Corte Feminino".to_string(),
            description: "Corte moderno e estilizado".to_string(),
            duration_minutes: 60,
            price: 45.0,
            original_price: 65.0,
            discount_percent: 31,
            category: ServiceCategory::Cabelo,
            available: true,
        },
        Service {
            id: "2".to_string(),
            name: "Escova Progressiva".to_string(),
            description: "Alisamento com formol".to_string(),
            duration_minutes: 180,
            price: 120.0,
            original_price: 180.0,
            discount_percent: 33,
            category: ServiceCategory::Cabelo,
            available: true,
        },
        Service {
            id: "3".to_string(),
            name: "Manicure".to_string(),
            description: "Cuidados com as unhas".to_string(),
            duration_minutes: 45,
            price: 25.0,
            original_price: 35.0,
            discount_percent: 29,
            category: ServiceCategory::Unhas,
            available: true,
        },
        Service {
            id: "4".to_string(),
            name: "Pedicure".to_string(),
            description: "Cuidados com os pés".to_string(),
            duration_minutes: 60,
            price: 30.0,
            original_price: 45.0,
            discount_percent: 33,
            category: ServiceCategory::Unhas,
            available: true,
        },
        Service {
            id: "5".to_string(),
            name: "Design de Sobrancelhas".to_string(),
            description: "Modelagem e design".to_string(),
            duration_minutes: 30,
            price: 20.0,
            original_price: 30.0,
            discount_percent: 33,
            category: ServiceCategory::Sobrancelhas,
            available: true,
        },
        Service {
            id: "6".to_string(),
            name: "Limpeza de Pele".to_string(),
            description: "Tratamento facial completo".to_string(),
            duration_minutes: 90,
            price: 80.0,
            original_price: 120.0,
            discount_percent: 33,
            category: ServiceCategory::Pele,
            available: true,
        },
    ]
}

pub fn salons() -> Vec<Salon> {
    vec![
        Salon {
            id: "1".to_string(),
            name: "Salon Beauty".to_string(),
            address: "Rua das Flores, 123 - Centro".to_string(),
            rating: 4.8,
            distance_km: 0.8,
            is_open: true,
            next_available_slot: "14:30".to_string(),
        },
        Salon {
            id: "2".to_string(),
            name: "Studio Elegance".to_string(),
            address: "Av. Principal, 456 - Jardins".to_string(),
            rating: 4.6,
            distance_km: 1.2,
            is_open: true,
            next_available_slot: "16:00".to_string(),
        },
        Salon {
            id: "3".to_string(),
            name: "Bella Vista".to_string(),
            address: "Rua da Paz, 789 - Vila Nova".to_string(),
            rating: 4.9,
            distance_km: 2.1,
            is_open: false,
            next_available_slot: "09:00".to_string(),
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::{Confirmed, Pending};

    let entries = [
        ("1", "Corte Feminino", "Salon Beauty", 15, "14:30", 60, 45.0, Confirmed),
        ("2", "Manicure", "Studio Elegance", 18, "10:00", 45, 25.0, Confirmed),
        ("3", "Escova Progressiva", "Bella Vista", 22, "16:00", 180, 120.0, Pending),
    ];

    entries
        .into_iter()
        .filter_map(|(id, service, salon, day, time, duration_minutes, price, status)| {
            let date = CalendarDate::new(2024, Month::December, day)?;
            let time = TimeSlot::parse(time).ok()?;
            Some(Appointment {
                id: id.to_string(),
                service: service.to_string(),
                salon: salon.to_string(),
                date,
                time,
                duration_minutes,
                price,
                status,
            })
        })
        .collect()
}

pub fn find_service(id_or_name: &str) -> Option<Service> {
    services()
        .into_iter()
        .find(|service| service.id == id_or_name || service.name.eq_ignore_ascii_case(id_or_name))
}
