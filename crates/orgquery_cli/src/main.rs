//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load the embedded sample dataset and run every query once.
//! - Keep output deterministic (`name=value` per line) for quick checks.

use log::info;
use orgquery_core::{
    core_version, load_sample_repositories, Employee, LoggingConfig, OrgQueryService, QueryResult,
};
use std::fmt::Display;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = LoggingConfig::from_env().and_then(|config| config.apply()) {
        eprintln!("orgquery: logging disabled: {err}");
    }

    let repos = match load_sample_repositories() {
        Ok(repos) => repos,
        Err(err) => {
            eprintln!("orgquery: failed to load sample dataset: {err}");
            return ExitCode::FAILURE;
        }
    };
    let service = OrgQueryService::from_repositories(&repos);
    info!("event=cli_report module=cli status=start");

    println!("orgquery_core version={}", core_version());
    println!("all_employees={}", service.all_employees().len());
    println!("employee_first_names={}", service.employee_first_names().join(","));
    println!("no_salary_below_1000={}", service.no_salary_below_1000());
    println!(
        "any_salary_above_2000_in_it_department={}",
        service.any_salary_above_2000_in_it_department()
    );
    print_ids(
        "employees_earning_below_5000",
        &service.employees_earning_below_5000(),
    );
    print_ids(
        "employees_earning_between_6000_and_7000",
        &service.employees_earning_between_6000_and_7000(),
    );
    print_result("grant_douglas_salary", service.grant_douglas_salary());
    print_result("max_salary", service.max_salary());
    print_ids("max_salary_employees", &service.max_salary_employees());
    print_result("second_max_salary", service.second_max_salary());
    print_id_result(
        "second_max_salary_employees",
        service.second_max_salary_employees(),
    );
    print_result("min_salary", service.min_salary());
    print_ids("min_salary_employees", &service.min_salary_employees());
    print_result("second_min_salary", service.second_min_salary());
    print_id_result(
        "second_min_salary_employees",
        service.second_min_salary_employees(),
    );
    print_result("average_salary", service.average_salary());
    print_ids("employees_above_average", &service.employees_above_average());
    print_ids("employees_below_average", &service.employees_below_average());
    println!("total_departments={}", service.total_departments());
    for (department_id, members) in service.employees_by_department() {
        print_ids(&format!("employees_by_department[{department_id}]"), &members);
    }
    let ascending: Vec<String> = service
        .job_histories_by_start_date_ascending()
        .iter()
        .map(|history| format!("{}@{}", history.employee_id, history.start_date))
        .collect();
    println!("job_histories_by_start_date_ascending={}", ascending.join(","));
    let descending: Vec<String> = service
        .job_histories_by_start_date_descending()
        .iter()
        .map(|history| format!("{}@{}", history.employee_id, history.start_date))
        .collect();
    println!("job_histories_by_start_date_descending={}", descending.join(","));
    print_ids(
        "employees_first_name_starting_with_a",
        &service.employees_first_name_starting_with_a(),
    );
    print_ids(
        "employees_with_job_id_containing_it",
        &service.employees_with_job_id_containing_it(),
    );
    print_ids(
        "employees_in_departments_50_80_100",
        &service.employees_in_departments_50_80_100(),
    );
    print_ids(
        "employees_in_departments_90_60_100_120_130",
        &service.employees_in_departments_90_60_100_120_130(),
    );
    print_ids(
        "employees_outside_departments_90_60_100_120_130",
        &service.employees_outside_departments_90_60_100_120_130(),
    );
    println!("employee_initials={}", service.employee_initials().join(","));
    println!("employee_full_names={}", service.employee_full_names().join(","));
    print_result("longest_name_length", service.longest_name_length());
    print_ids("longest_named_employees", &service.longest_named_employees());

    info!("event=cli_report module=cli status=ok");
    ExitCode::SUCCESS
}

fn print_ids(name: &str, employees: &[&Employee]) {
    let ids: Vec<String> = employees.iter().map(|employee| employee.id.to_string()).collect();
    println!("{name}={} ids={}", employees.len(), ids.join(","));
}

fn print_result<T: Display>(name: &str, result: QueryResult<T>) {
    match result {
        Ok(value) => println!("{name}={value}"),
        Err(err) => println!("{name}=error ({err})"),
    }
}

fn print_id_result(name: &str, result: QueryResult<Vec<&Employee>>) {
    match result {
        Ok(employees) => print_ids(name, &employees),
        Err(err) => println!("{name}=error ({err})"),
    }
}
