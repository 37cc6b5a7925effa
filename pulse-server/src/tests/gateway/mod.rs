mod bearer;
mod route_table;
