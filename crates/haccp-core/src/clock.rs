//! Reloj inyectable.
//!
//! Las vistas derivadas cambian con el paso de los días aun sin escrituras
//! (un contrato se vuelve urgente solo por el calendario); inyectar el reloj
//! hace deterministas las pruebas de borde de día.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Fecha actual truncada a medianoche (granularidad de día).
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reloj de pared.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Reloj fijo para pruebas.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Fija el reloj a la medianoche de `date`.
    pub fn at(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_truncates_to_the_given_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let clock = FixedClock::at(date);
        assert_eq!(clock.today(), date);
    }
}
