use chrono::NaiveDate;
use orgquery_core::{load_sample_repositories, OrgQueryService, OrgRepositories};

fn setup() -> OrgRepositories {
    load_sample_repositories().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn all_employees_returns_every_record() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let employees = service.all_employees();
    assert_eq!(employees.len(), 107);
    assert_eq!(employees[0].id, 100);
    assert_eq!(employees[106].id, 206);
}

#[test]
fn first_names_follow_employee_order() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let employees = service.all_employees();
    let names = service.employee_first_names();
    assert_eq!(names.len(), employees.len());
    for (employee, name) in employees.iter().zip(&names) {
        assert_eq!(employee.first_name, *name);
    }
}

#[test]
fn salary_predicate_checks_hold_for_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert!(service.no_salary_below_1000());
    assert!(service.any_salary_above_2000_in_it_department());
}

#[test]
fn salary_filters_match_sample_counts() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.employees_earning_below_5000().len(), 49);
    assert_eq!(service.employees_earning_between_6000_and_7000().len(), 8);
}

#[test]
fn grant_douglas_salary_is_found() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.grant_douglas_salary().unwrap(), 2600);
}

#[test]
fn max_salaries_match_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.max_salary().unwrap(), 24000);
    let top = service.max_salary_employees();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].last_name, "King");

    assert_eq!(service.second_max_salary().unwrap(), 17000);
    let runners_up = service.second_max_salary_employees().unwrap();
    let names: Vec<&str> = runners_up.iter().map(|e| e.last_name.as_str()).collect();
    assert_eq!(names, ["Kochhar", "De Haan"]);
}

#[test]
fn min_salaries_match_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.min_salary().unwrap(), 2100);
    let bottom = service.min_salary_employees();
    assert_eq!(bottom.len(), 1);
    assert_eq!(bottom[0].salary, 2100);

    assert_eq!(service.second_min_salary().unwrap(), 2200);
    let second = service.second_min_salary_employees().unwrap();
    assert_eq!(second.len(), 2);
    assert!(second.iter().all(|e| e.salary == 2200));
}

#[test]
fn average_salary_and_partition_match_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let average = service.average_salary().unwrap();
    assert!((average - 6461.831_775_700_934_5).abs() < 1e-9);
    assert_eq!(service.employees_above_average().len(), 51);
    assert_eq!(service.employees_below_average().len(), 56);
}

#[test]
fn total_departments_counts_managerless_departments_too() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.total_departments(), 27);
}

#[test]
fn job_histories_sorted_ascending_by_start_date() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let histories = service.job_histories_by_start_date_ascending();
    assert_eq!(histories.len(), 10);
    assert_eq!(histories[0].start_date, date(1995, 9, 17));
    assert_eq!(histories[9].start_date, date(2007, 1, 1));
    assert!(histories
        .windows(2)
        .all(|pair| pair[0].start_date <= pair[1].start_date));
}

#[test]
fn job_histories_sorted_descending_by_start_date() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let histories = service.job_histories_by_start_date_descending();
    assert_eq!(histories.len(), 10);
    assert_eq!(histories[0].start_date, date(2007, 1, 1));
    assert_eq!(histories[9].start_date, date(1995, 9, 17));
    assert!(histories
        .windows(2)
        .all(|pair| pair[0].start_date >= pair[1].start_date));
}

#[test]
fn equal_start_dates_keep_repository_order_in_both_directions() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let tied = date(2006, 3, 24);
    for histories in [
        service.job_histories_by_start_date_ascending(),
        service.job_histories_by_start_date_descending(),
    ] {
        let tied_ids: Vec<u32> = histories
            .iter()
            .filter(|h| h.start_date == tied)
            .map(|h| h.employee_id)
            .collect();
        assert_eq!(tied_ids, [114, 176]);
    }
}

#[test]
fn name_and_job_filters_match_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let a_names = service.employees_first_name_starting_with_a();
    assert_eq!(a_names.len(), 10);
    assert!(a_names.iter().all(|e| e.first_name.starts_with('A')));

    let it_jobs = service.employees_with_job_id_containing_it();
    assert_eq!(it_jobs.len(), 5);
    assert!(it_jobs.iter().all(|e| e.job_id.contains("IT")));
}

#[test]
fn department_set_filters_match_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.employees_in_departments_50_80_100().len(), 86);
    assert_eq!(service.employees_in_departments_90_60_100_120_130().len(), 14);
    assert_eq!(
        service
            .employees_outside_departments_90_60_100_120_130()
            .len(),
        93
    );
}

#[test]
fn initials_and_full_names_follow_employee_order() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let initials = service.employee_initials();
    let full_names = service.employee_full_names();
    assert_eq!(initials.len(), 107);
    assert_eq!(initials[0], "SK");
    assert_eq!(initials[1], "NK");
    assert_eq!(initials[105], "SH");
    assert_eq!(initials[106], "WG");
    assert_eq!(full_names[0], "Steven King");
    assert_eq!(full_names[106], "William Gietz");
}

#[test]
fn longest_names_match_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    assert_eq!(service.longest_name_length().unwrap(), 17);
    let longest: Vec<String> = service
        .longest_named_employees()
        .iter()
        .map(|e| e.full_name())
        .collect();
    assert_eq!(
        longest,
        [
            "Jose Manuel Urman",
            "Irene Mikkilineni",
            "Alberto Errazuriz",
            "Christopher Olsen",
            "Nanette Cambrault",
            "Michael Hartstein",
        ]
    );
}

#[test]
fn employees_by_department_groups_sample() {
    let repos = setup();
    let service = OrgQueryService::from_repositories(&repos);

    let groups = service.employees_by_department();
    assert_eq!(groups.len(), 11);
    assert_eq!(groups[&50].len(), 45);
    assert_eq!(groups[&80].len(), 35);
    assert_eq!(groups[&90].len(), 3);
    assert!(!groups.contains_key(&120));
}
