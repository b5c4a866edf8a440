mod create_owner;
