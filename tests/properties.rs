use payroll_engine::calculation::round_currency;
use payroll_engine::error::PayrollError;
use payroll_engine::models::{Employee, Period};
use payroll_engine::registry::Registry;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Currency amounts in cents, as a Decimal with two places.
fn cents(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|c| Decimal::new(c, 2))
}

/// Hours in quarter-hour steps.
fn quarter_hours(range: std::ops::Range<i64>) -> impl Strategy<Value = Decimal> {
    range.prop_map(|q| Decimal::new(q * 25, 2))
}

proptest! {
    #[test]
    fn hourly_at_or_under_forty_hours_has_no_overtime(
        rate in cents(0..20_000),
        hours in quarter_hours(0..161),
    ) {
        let mut employee = Employee::hourly("Prop", "H", rate);
        employee.add_hours(hours).unwrap();

        let pay = employee.compute_pay(Period::Weekly).unwrap();
        prop_assert_eq!(pay, round_currency(hours * rate));
        prop_assert_eq!(pay.scale(), 2);
        prop_assert_eq!(employee.hours_worked(), Some(Decimal::ZERO));
    }

    #[test]
    fn hourly_over_forty_hours_pays_time_and_a_half(
        rate in cents(0..20_000),
        hours in quarter_hours(161..400),
    ) {
        let mut employee = Employee::hourly("Prop", "H", rate);
        employee.add_hours(hours).unwrap();

        let forty = Decimal::new(40, 0);
        let expected = round_currency(forty * rate + (hours - forty) * rate * Decimal::new(15, 1));
        prop_assert_eq!(employee.compute_pay(Period::Weekly).unwrap(), expected);
        prop_assert_eq!(employee.hours_worked(), Some(Decimal::ZERO));
        prop_assert_eq!(employee.compute_pay(Period::Weekly).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn salaried_pay_reassembles_annual_salary(salary in cents(0..100_000_000)) {
        let mut employee = Employee::salaried("Prop", "S", salary);

        for period in [Period::Weekly, Period::Biweekly, Period::Monthly] {
            let per_year = Decimal::from(period.periods_per_year());
            let reassembled = employee.compute_pay(period).unwrap() * per_year;
            // Each period may drift by up to half a cent.
            let tolerance = per_year / Decimal::new(200, 0);
            prop_assert!((reassembled - salary).abs() <= tolerance,
                "{period}: {reassembled} vs {salary}");
        }
    }

    #[test]
    fn raise_then_inverse_cut_restores_salary(
        salary in cents(100_000..100_000_000),
        percent in (1i64..5_000).prop_map(|p| Decimal::new(p, 2)),
    ) {
        let mut employee = Employee::salaried("Prop", "S", salary);
        employee.apply_raise(percent).unwrap();

        let factor = Decimal::ONE + percent / Decimal::ONE_HUNDRED;
        let inverse = -(percent / factor);
        employee.apply_raise(inverse).unwrap();

        let restored = employee.annual_salary().unwrap();
        prop_assert!((restored - salary).abs() <= Decimal::new(1, 2),
            "{restored} vs {salary} after +{percent}% / {inverse}%");
    }

    #[test]
    fn zero_raise_is_identity(rate in cents(0..20_000)) {
        let mut employee = Employee::hourly("Prop", "H", rate);
        employee.apply_raise(Decimal::ZERO).unwrap();
        prop_assert_eq!(employee.hourly_rate(), Some(rate));
    }

    #[test]
    fn duplicate_hire_never_replaces_original(
        first in cents(0..10_000_000),
        second in cents(0..10_000_000),
    ) {
        let mut registry = Registry::new("Prop Co");
        registry.hire(Employee::salaried("First", "X1", first)).unwrap();

        let err = registry.hire(Employee::salaried("Second", "X1", second)).unwrap_err();
        let is_duplicate = matches!(err, PayrollError::DuplicateEmployee { .. });
        prop_assert!(is_duplicate);
        prop_assert_eq!(registry.len(), 1);
        prop_assert_eq!(registry.get("X1").unwrap().annual_salary(), Some(first));
    }

    #[test]
    fn payroll_total_is_rounded_sum_of_detail(
        salaries in proptest::collection::vec(cents(0..50_000_000), 0..20),
    ) {
        let mut registry = Registry::new("Prop Co");
        for (i, salary) in salaries.iter().enumerate() {
            let bonus_percent = Decimal::new(10, 0);
            let emp_id = format!("M{i:03}");
            let manager = Employee::manager(format!("M{i}"), emp_id, *salary, bonus_percent);
            registry.hire(manager).unwrap();
        }

        let run = registry.run_payroll(Period::Biweekly).unwrap();
        let summed = run.detail.iter().fold(Decimal::ZERO, |acc, e| acc + e.gross_pay);
        prop_assert_eq!(run.total, round_currency(summed));
        prop_assert_eq!(run.total.scale(), 2);
        prop_assert_eq!(run.detail.len(), salaries.len());
    }

    #[test]
    fn fire_keeps_remaining_lookups_and_order(
        count in 1usize..30,
        fired in 0usize..30,
    ) {
        let fired = fired % count;
        let mut registry = Registry::new("Prop Co");
        for i in 0..count {
            let salary = Decimal::new(50_000 + i as i64, 0);
            let employee = Employee::salaried(format!("S{i}"), format!("S{i:03}"), salary);
            registry.hire(employee).unwrap();
        }

        registry.fire(&format!("S{fired:03}")).unwrap();

        let ids: Vec<String> = (0..count)
            .filter(|&i| i != fired)
            .map(|i| format!("S{i:03}"))
            .collect();
        let listed: Vec<&str> = registry.list_employees().iter().map(|e| e.emp_id()).collect();
        prop_assert_eq!(listed, ids.iter().map(String::as_str).collect::<Vec<_>>());
        for id in &ids {
            prop_assert_eq!(registry.get(id).unwrap().emp_id(), id.as_str());
        }
    }
}
