mod delete_ship;
mod get_ship;
mod list_ships;
