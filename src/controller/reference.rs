use actix_web::{HttpResponse, Responder};

use crate::model::course::courses;
use crate::model::reference::{ACTIVITY_OPTIONS, SCHEDULE, STANDARD_FINES};

// Static reference tables; none of these mutate at runtime.

pub async fn get_courses() -> impl Responder {
    HttpResponse::Ok().json(courses())
}

pub async fn get_schedule() -> impl Responder {
    HttpResponse::Ok().json(SCHEDULE)
}

pub async fn get_fine_schedule() -> impl Responder {
    HttpResponse::Ok().json(STANDARD_FINES)
}

pub async fn get_activities() -> impl Responder {
    HttpResponse::Ok().json(ACTIVITY_OPTIONS)
}
